//! Error types for Password Master Core

use thiserror::Error;

/// Main error type for generation and history operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// The effective character alphabet is empty, either because no
    /// category is enabled or because exclusions removed every character
    #[error("Empty charset: {0}")]
    EmptyCharset(String),

    /// A generator was asked for a zero-length output
    #[error("Invalid length: {0}")]
    InvalidLength(usize),

    /// Key-value storage backend failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// History payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
