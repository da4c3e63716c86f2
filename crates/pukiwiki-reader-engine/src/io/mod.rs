use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

pub use crate::error::IoError;

/// Extension of page source files.
pub const PAGE_EXTENSION: &str = "txt";

/// File name a page is stored under: each UTF-8 byte of the name as two
/// upper-case hex digits, plus `.txt`.
pub fn file_name_for_page(page_name: &str) -> String {
    format!("{}.{PAGE_EXTENSION}", hex::encode_upper(page_name))
}

/// Recovers the page name from a page file's name.
pub fn page_name_for_file(path: &Path) -> Result<String, IoError> {
    let invalid = || IoError::InvalidFileName(path.to_path_buf());
    if path.extension().is_none_or(|ext| ext != PAGE_EXTENSION) {
        return Err(invalid());
    }
    let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(invalid)?;
    let bytes = hex::decode(stem).map_err(|_| invalid())?;
    String::from_utf8(bytes).map_err(|_| invalid())
}

/// Path of the page's source file under `pages_root`.
pub fn page_path(page_name: &str, pages_root: &Path) -> PathBuf {
    RelativePathBuf::from(file_name_for_page(page_name)).to_path(pages_root)
}

/// Read a page's source text from under `pages_root`
pub fn read_page(page_name: &str, pages_root: &Path) -> Result<String, IoError> {
    read_file(&page_path(page_name, pages_root))
}

/// Read a page file's source text
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}
