pub mod repository;

pub use repository::{FsRepository, LoadError, MarkdownRepository, UrlFetcher};

use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocumentsDir(String),
}

/// Read a markdown file and return its content
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a markdown file, creating parent directories as needed
pub fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    log::debug!("writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content).map_err(IoError::Io)
}

/// Read a markdown file relative to the documents root
pub fn read_file(relative_path: &RelativePath, documents_root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(documents_root))
}

/// File name for a document saved without an explicit destination.
pub fn new_document_name(timestamp_millis: u128) -> String {
    format!("new_markdown_document_{timestamp_millis}.md")
}

/// Scan for markdown files in the documents directory
pub fn scan_markdown_files(documents_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_documents_dir(documents_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(documents_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_documents_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocumentsDir(
            "documents directory not found".to_string(),
        ));
    }

    Ok(())
}
