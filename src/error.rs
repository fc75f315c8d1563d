//! Error types for the file sorter
//!
//! Per-file failures are carried as values up to the copy outcome and end
//! up in the log; only configuration and runtime failures reach `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sorting operations
#[derive(Error, Debug)]
pub enum SorterError {
    /// I/O error during file operations
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source and destination are the same file
    #[error("Source and destination are the same: {0}")]
    SameSourceAndDestination(PathBuf),

    /// Source root missing or not a directory
    #[error("Source folder does not exist: {0}")]
    SourceNotFound(PathBuf),

    /// Invalid path format
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// A spawned copy task did not finish normally
    #[error("Task failed: {0}")]
    TaskFailed(String),
}

impl SorterError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}

/// Result type alias for sorting operations
pub type Result<T> = std::result::Result<T, SorterError>;

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| SorterError::io(path, e))
    }
}
