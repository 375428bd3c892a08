//! Storage layer for the agent-directory engine.
//!
//! Provides RocksDB-backed storage with:
//! - Column family isolation for lists, name resolution, entries, postings
//! - (tenant_id, list_name) uniqueness enforced at create time
//! - A write-path hook that keeps each entry's derived search representation
//!   and its postings in step with content, atomically via WriteBatch
//! - Per-list key prefixes as the structural scoping boundary for reads

pub mod column_families;
pub mod db;
pub mod error;
pub mod keys;

pub use db::Store;
pub use error::StorageError;
pub use keys::{EntryKey, ListNameKey, PostingKey};
