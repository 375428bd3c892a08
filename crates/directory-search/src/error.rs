//! Search error types.
//!
//! Absence is never an error here: empty scope, empty matches, and filters
//! that match nothing all return empty result sets. Only storage failures
//! propagate.

use thiserror::Error;

use directory_storage::StorageError;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Storage read failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
