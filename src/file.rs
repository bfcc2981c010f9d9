use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Content of a file read into memory
#[derive(Debug, Clone)]
pub struct FileContent {
    /// Path to the file as given
    pub path: String,
    /// File content as valid UTF-8 string
    pub content: String,
    /// Byte length of the content
    pub len: usize,
    /// BLAKE3 hash of the content (hex-encoded)
    pub checksum: String,
}

/// Error types for file operations
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid UTF-8 in file: {0}")]
    InvalidUtf8(String),
}

/// BLAKE3 checksum of `content`, hex-encoded
pub fn checksum(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// Read a file from disk with UTF-8 validation
///
/// # Returns
/// * `Ok(FileContent)` - File content with metadata
/// * `Err(FileError)` - File not found, I/O error, or invalid UTF-8
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<FileContent, FileError> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();

    let bytes = fs::read(path_ref).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            FileError::NotFound(path_str.clone())
        } else {
            FileError::Io {
                path: path_str.clone(),
                source,
            }
        }
    })?;

    let content =
        String::from_utf8(bytes).map_err(|_| FileError::InvalidUtf8(path_str.clone()))?;

    let len = content.len();
    let checksum = checksum(&content);

    tracing::debug!(path = %path_str, len, %checksum, "read target file");

    Ok(FileContent {
        path: path_str,
        content,
        len,
        checksum,
    })
}

/// Overwrite `path` with `content`, truncating whatever was there
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FileError> {
    let path_ref = path.as_ref();

    fs::write(path_ref, content.as_bytes()).map_err(|source| FileError::Io {
        path: path_ref.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path_ref.display(), len = content.len(), "wrote target file");
    Ok(())
}
