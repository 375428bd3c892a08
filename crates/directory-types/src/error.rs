//! Error types shared across the directory engine.

use thiserror::Error;

/// Unified error type for domain-level failures.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
