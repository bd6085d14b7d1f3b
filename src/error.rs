//! Error types for gamexplorer

use thiserror::Error;

/// Main error type for gamexplorer operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid archive: {0}")]
    InvalidArchive(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Malformed or missing command arguments
    #[error("{0}")]
    Usage(String),
}

/// Result type alias for gamexplorer operations
pub type Result<T> = std::result::Result<T, Error>;
