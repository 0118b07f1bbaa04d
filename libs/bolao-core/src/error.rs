//! Error types for bolao-core.

use thiserror::Error;

/// Result type alias using PoolError.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Errors surfaced to the user as notices. None of them are fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("limit of {max} entries reached")]
    CapacityExceeded { max: usize },

    #[error("draw result has no numbers")]
    EmptyResult,

    #[error("no saved entries under key {key}")]
    NotFound { key: String },

    #[error("saved entries are corrupt: {0}")]
    Corrupt(String),

    #[error("cancelled by user")]
    UserDeclined,

    #[error("no entry at index {index}")]
    NoSuchEntry { index: usize },

    #[error("storage error: {0}")]
    Storage(String),
}
