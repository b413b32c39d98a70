//! Error types for the server directory.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Failed to read the directory file
    #[error("failed to load server records from {path}: {source}")]
    LoadFailed {
        /// Path to the directory file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON in the directory file
    #[error("invalid JSON in directory file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Invalid field value in a server record
    #[error("invalid server record '{server_id}': {reason}")]
    InvalidRecord {
        /// Identifier of the offending record (may be empty)
        server_id: String,
        /// Reason for validation failure
        reason: String,
    },
}

impl DirectoryError {
    /// Create a load-failed error for a path.
    pub fn load_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LoadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-record error.
    pub fn invalid_record(server_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            server_id: server_id.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
