use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary outlines directory
pub fn create_test_outlines_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file with content inside the outlines directory
pub fn create_test_file(outlines_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = outlines_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
