//! Column family definitions for RocksDB.
//!
//! Each column family isolates data with a different access pattern:
//! - lists: directory list rows keyed by list id
//! - list_names: (tenant, list_name) -> list id, enforcing name uniqueness
//! - entries: entry rows keyed by {list_id}:{entry_id}; one list's entries
//!   occupy one contiguous key range
//! - postings: {list_id}:{term}:{entry_id} -> weight, the ranked-match index

use rocksdb::{ColumnFamilyDescriptor, Options};

/// Column family name for directory list rows
pub const CF_LISTS: &str = "lists";

/// Column family name for (tenant_id, list_name) -> list_id resolution
pub const CF_LIST_NAMES: &str = "list_names";

/// Column family name for directory entries
pub const CF_ENTRIES: &str = "entries";

/// Column family name for search postings
pub const CF_POSTINGS: &str = "postings";

/// All column family names
pub const ALL_CF_NAMES: &[&str] = &[CF_LISTS, CF_LIST_NAMES, CF_ENTRIES, CF_POSTINGS];

/// Create column family options for entries (JSON documents, compressed)
fn entries_options() -> Options {
    let mut opts = Options::default();
    opts.set_compression_type(rocksdb::DBCompressionType::Zstd);
    opts
}

/// Build all column family descriptors
pub fn build_cf_descriptors() -> Vec<ColumnFamilyDescriptor> {
    vec![
        ColumnFamilyDescriptor::new(CF_LISTS, Options::default()),
        ColumnFamilyDescriptor::new(CF_LIST_NAMES, Options::default()),
        ColumnFamilyDescriptor::new(CF_ENTRIES, entries_options()),
        ColumnFamilyDescriptor::new(CF_POSTINGS, Options::default()),
    ]
}
