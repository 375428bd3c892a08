//! Tool adapter error types.

use thiserror::Error;

use directory_discovery::DiscoveryError;
use directory_search::SearchError;
use directory_storage::StorageError;

/// Errors surfaced to the agent runtime.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Storage read failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Search failed
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Discovery failed
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),
}
