//! Directory discovery and prompt documentation.
//!
//! Turns an agent's accessible directory names into structured descriptors
//! plus natural-language documentation sized to the situation: detailed
//! guidance with a synonym table for a lone directory, selection guidance
//! with brief summaries for several, and an explicit stub for none.

pub mod descriptor;
pub mod discover;
pub mod docs;
pub mod error;

pub use descriptor::{DirectoryDescriptor, DiscoveryOutput};
pub use discover::describe_available;
pub use error::DiscoveryError;
