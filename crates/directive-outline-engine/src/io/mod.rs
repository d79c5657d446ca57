//! Outline files on disk.
//!
//! An outline is stored as TOML with the directive type at the top and one
//! `[[paragraph]]` table per paragraph in document order:
//!
//! ```toml
//! directive = "mco"
//!
//! [[paragraph]]
//! id = 1
//! level = 1
//! content = "This Order establishes policy."
//! mandatory = true
//! title = "Situation"
//! ```

use crate::editing::{Outline, OutlineError};
use crate::models::{DirectiveType, Paragraph};
use relative_path::RelativePath;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTLINE_EXTENSION: &str = "toml";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid outline file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not serialize outline: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid outline: {0}")]
    Outline(#[from] OutlineError),
    #[error("Invalid outlines directory: {0}")]
    InvalidOutlinesDir(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct OutlineFile {
    #[serde(default)]
    directive: DirectiveType,
    #[serde(default, rename = "paragraph")]
    paragraphs: Vec<Paragraph>,
}

/// Parse an outline from TOML text
pub fn parse_outline(text: &str) -> Result<Outline, IoError> {
    let file: OutlineFile = toml::from_str(text)?;
    let outline = Outline::from_paragraphs(file.paragraphs)?.with_directive(file.directive);
    Ok(outline)
}

/// Serialize an outline to TOML text
pub fn serialize_outline(outline: &Outline) -> Result<String, IoError> {
    let file = OutlineFile {
        directive: outline.directive(),
        paragraphs: outline.paragraphs().to_vec(),
    };
    Ok(toml::to_string_pretty(&file)?)
}

/// Read an outline file relative to the outlines directory
pub fn read_outline(relative_path: &RelativePath, outlines_root: &Path) -> Result<Outline, IoError> {
    let absolute_path = relative_path.to_path(outlines_root);
    read_outline_at(&absolute_path)
}

/// Read an outline file from an absolute or working-directory path
pub fn read_outline_at(path: &Path) -> Result<Outline, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let outline = parse_outline(&text)?;
    log::info!(
        "loaded outline with {} paragraphs from {}",
        outline.len(),
        path.display()
    );
    Ok(outline)
}

/// Write an outline file relative to the outlines directory
pub fn write_outline(
    relative_path: &RelativePath,
    outlines_root: &Path,
    outline: &Outline,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(outlines_root);
    write_outline_at(&absolute_path, outline)
}

/// Write an outline file, creating parent directories as needed
pub fn write_outline_at(path: &Path, outline: &Outline) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serialize_outline(outline)?)?;
    log::info!("saved outline to {}", path.display());
    Ok(())
}

/// Find outline files in the outlines directory, sorted
pub fn scan_outline_files(outlines_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !outlines_root.exists() {
        return Err(IoError::InvalidOutlinesDir(
            "outlines directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(outlines_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == OUTLINE_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_outlines_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidOutlinesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
