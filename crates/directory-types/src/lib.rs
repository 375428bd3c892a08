//! # directory-types
//!
//! Shared domain types for the agent directory engine.
//!
//! This crate defines the structures the rest of the system works with:
//! - Directory lists: tenant-owned, named collections of one entry type
//! - Directory entries: structured records with name, tags, contact and
//!   attribute data
//! - Search modes: the three name-matching strategies
//! - Settings: layered runtime configuration

pub mod config;
pub mod entry;
pub mod error;
pub mod list;
pub mod mode;

pub use config::{SearchSettings, Settings};
pub use entry::DirectoryEntry;
pub use error::DirectoryError;
pub use list::DirectoryList;
pub use mode::SearchMode;
