use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User settings for the outline editor.
///
/// ```toml
/// outlines_path = "~/Documents/directives"
/// directive = "mco"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory relative outline paths are resolved against
    pub outlines_path: PathBuf,
    /// Directive type used to seed newly created outlines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directive: Option<String>,
}

impl Config {
    pub fn new(outlines_path: impl Into<PathBuf>) -> Self {
        Self {
            outlines_path: outlines_path.into(),
            directive: None,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded outlines path
        config.outlines_path =
            Self::expand_path(&config.outlines_path).unwrap_or(config.outlines_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/directive-outline");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolve an outline path given on the command line.
    ///
    /// Absolute paths are used as-is; relative ones land under `outlines_path`.
    pub fn resolve_outline(&self, path: &Path) -> PathBuf {
        let expanded = Self::expand_path(path).unwrap_or_else(|| path.to_path_buf());
        if expanded.is_absolute() {
            expanded
        } else {
            self.outlines_path.join(expanded)
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
