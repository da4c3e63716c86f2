use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory to hold page files
pub fn create_test_pages_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a page file named after `page_name` with content
pub fn create_test_page(pages_dir: &TempDir, page_name: &str, content: &str) -> PathBuf {
    let file_path = pages_dir.path().join(crate::io::file_name_for_page(page_name));
    fs::write(&file_path, content).unwrap();
    file_path
}
