//! Entry-type schema definitions.

use serde::{Deserialize, Serialize};

/// Static definition for one entry type.
///
/// Definitions describe vocabulary and usage guidance for a category of
/// directory. They are bundled with the binary, immutable at runtime, and
/// loaded once per process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryTypeSchema {
    /// Key this schema is registered under (e.g. "doctor").
    pub entry_type: String,
    /// Definition version, bumped when vocabulary or guidance changes.
    pub version: u32,
    /// Entry fields worth querying, listed for the consuming agent.
    pub searchable_fields: Vec<String>,
    /// Formal/informal vocabulary pairs for query translation.
    #[serde(default)]
    pub synonym_mappings: Vec<SynonymMapping>,
    /// Usage documentation surfaced through directory discovery.
    pub directory_purpose: DirectoryPurpose,
}

/// One formal/informal vocabulary pairing.
///
/// Consumers translate colloquial query terms ("heart doctor") into the
/// formal terms entries are stored under ("cardiologist") before searching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymMapping {
    pub formal_terms: Vec<String>,
    pub informal_terms: Vec<String>,
}

/// What a directory of this entry type is for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryPurpose {
    /// One-sentence description of the directory's contents.
    pub description: String,
    /// Intents this directory serves.
    pub use_for: Vec<String>,
    /// Example queries a consumer might issue.
    pub example_queries: Vec<String>,
    /// Intents this directory does not serve.
    pub not_for: Vec<String>,
}
