//! Structured error types for analytics-csv.
//!
//! Every variant carries the path it failed on, so a batch report can say
//! which file broke.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source directory could not be listed
    #[error("Cannot read directory {path:?}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },

    /// File could not be opened, created or flushed
    #[error("I/O error on {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    /// CSV parsing failed (ragged rows, invalid UTF-8, ...)
    #[error("CSV error in {path:?}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialization failed
    #[error("JSON error writing {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
