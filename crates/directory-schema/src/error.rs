//! Schema registry error types.

use thiserror::Error;

/// Errors that can occur in the schema registry
///
/// `Clone` because the registry caches its load result and hands the same
/// failure to every caller.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    /// No definition exists for the requested entry type. Signals a
    /// deployment or import defect and must propagate to the caller.
    #[error("Unknown entry type: {0}")]
    UnknownEntryType(String),

    /// An embedded definition failed to parse. Only reachable when the
    /// bundled definitions are broken, so this is also fatal.
    #[error("Invalid schema definition for '{entry_type}': {message}")]
    InvalidDefinition { entry_type: String, message: String },
}
