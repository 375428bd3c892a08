//! Agent-facing directory tools.
//!
//! Provides:
//! - getAvailableDirectories: descriptors plus generated usage documentation
//! - searchDirectory: scoped search over one named directory, returning
//!   flattened records ready for tool-call serialization

pub mod error;
pub mod requests;
pub mod responses;
pub mod tools;

pub use error::ToolError;
pub use requests::{AgentDirectoryConfig, SearchDirectoryRequest};
pub use responses::{AvailableDirectories, EntryRecord, SearchDirectoryResponse};
pub use tools::DirectoryTools;
