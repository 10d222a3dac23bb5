//! Error types for the sales directory store.

use sales_core::IdError;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while building the dataset.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The catalog cannot be expanded into a dataset.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Reading a catalog file failed.
    #[error("io error: {0}")]
    Io(String),

    /// Parsing a catalog file failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A generated identifier was out of range.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
