/// This module defines the error types for pdfscout.
///
/// Errors fall into two groups that are handled very differently:
///
/// 1. **Run-level errors** stop a search before any work is submitted:
///    a missing root directory, an invalid worker count, an unreadable
///    config file.
///
/// 2. **Per-file errors** are raised while a single document is opened and
///    parsed. They never leave the worker: the search task turns them into a
///    `SearchOutcome::ReadError` so one bad PDF cannot stop the run.
///
/// ```rust,ignore
/// match search(&config, &mut reporter) {
///     Ok(report) => // Every file produced an outcome,
///     Err(SearchError::DirectoryNotFound(path)) => // Nothing was searched,
///     Err(e) => // Other pre-flight failure
/// }
/// ```
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur during search operations
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    // Per-file messages leave the path out; reporters print the file name
    #[error("File not found")]
    FileNotFound(PathBuf),
    #[error("Permission denied")]
    PermissionDenied(PathBuf),
    #[error("Document is encrypted")]
    Encrypted(PathBuf),
    #[error("Failed to parse PDF: {message}")]
    Pdf { path: PathBuf, message: String },
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SearchError {
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound(path.into())
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn encrypted(path: impl Into<PathBuf>) -> Self {
        Self::Encrypted(path.into())
    }

    pub fn pdf(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Pdf {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern(pattern.into())
    }

    /// Maps an IO error raised while opening `path` onto the matching variant.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::IoError(err),
        }
    }
}
