//! Store error types.
//!
//! Typed errors so callers can distinguish a missing data directory from a
//! corrupt record without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when persisting or loading essays.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory could not be created or accessed.
    #[error("data directory unavailable: {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An underlying filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
