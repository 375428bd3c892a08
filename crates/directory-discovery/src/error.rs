//! Discovery error types.

use thiserror::Error;

use directory_schema::SchemaError;
use directory_storage::StorageError;

/// Errors that can occur while describing available directories.
///
/// An accessible name that resolves to nothing is not represented here: it
/// is skipped and logged. A resolved list whose entry type has no schema is
/// a deployment defect and surfaces as [`DiscoveryError::Schema`].
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Storage read failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Schema lookup failed for a resolved list
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}
