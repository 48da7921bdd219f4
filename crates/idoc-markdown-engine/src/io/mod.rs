use crate::models::Document;
use crate::parsing::{self, ParseError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unreadable document {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
}

/// Read a text file
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a text file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Load and parse a markdown document
pub fn load_document(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(IoError::Io)?;
    parsing::parse_bytes(&bytes).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a document and write it to `path`
pub fn save_document(path: &Path, doc: &Document) -> Result<(), IoError> {
    write_file(path, &doc.to_markdown())
}
