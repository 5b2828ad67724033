//! Error types for the donor record store.

use thiserror::Error;

/// Failures reading or writing the persisted donor collection
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage backend is missing or rejected the operation
    #[error("storage unavailable for key '{key}': {message}")]
    Unavailable { key: String, message: String },

    /// The persisted value is not a valid donor collection
    #[error("stored value under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be serialized
    #[error("failed to encode donors: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn unavailable(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
