//! Directory descriptors.

use serde::{Deserialize, Serialize};

use directory_schema::EntryTypeSchema;
use directory_types::DirectoryList;

/// One accessible directory, described for the consuming agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryDescriptor {
    pub list_name: String,
    pub entry_type: String,
    /// Live count at description time.
    pub entry_count: usize,
    /// List description when the tenant supplied one, else the entry type's
    /// purpose description.
    pub description: String,
    pub use_cases: Vec<String>,
    pub searchable_fields: Vec<String>,
    pub example_queries: Vec<String>,
    pub not_for: Vec<String>,
}

impl DirectoryDescriptor {
    /// Assemble a descriptor from a resolved list, its schema, and a live
    /// entry count.
    pub fn assemble(list: &DirectoryList, schema: &EntryTypeSchema, entry_count: usize) -> Self {
        let purpose = &schema.directory_purpose;
        Self {
            list_name: list.list_name.clone(),
            entry_type: list.entry_type.clone(),
            entry_count,
            description: list
                .description
                .clone()
                .unwrap_or_else(|| purpose.description.clone()),
            use_cases: purpose.use_for.clone(),
            searchable_fields: schema.searchable_fields.clone(),
            example_queries: purpose.example_queries.clone(),
            not_for: purpose.not_for.clone(),
        }
    }
}

/// Descriptors plus the adaptive documentation text built from them.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryOutput {
    pub descriptors: Vec<DirectoryDescriptor>,
    pub documentation: String,
}
