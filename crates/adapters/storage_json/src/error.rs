//! Storage-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use roster_domain::error::RosterError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading a collection file failed for a reason other than absence.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or replacing a collection file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a collection.
    #[error("failed to encode collection: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
