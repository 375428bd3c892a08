//! Entry-type schema registry for agent-directory.
//!
//! Every directory list declares an entry type ("doctor", "phone_contact",
//! ...). This crate bundles the static definition for each type: which
//! fields are worth searching, formal/informal vocabulary pairs, and the
//! usage documentation surfaced to agents during directory discovery.
//!
//! Definitions are a closed set, embedded at compile time and parsed once
//! into an immutable table. An unknown entry type is a configuration error
//! and is always fatal to the requesting operation.

pub mod error;
pub mod registry;
pub mod types;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use types::{DirectoryPurpose, EntryTypeSchema, SynonymMapping};
