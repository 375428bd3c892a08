//! Tool call outputs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use directory_discovery::DirectoryDescriptor;
use directory_types::DirectoryEntry;

/// Keys the flattener owns; map fields never overwrite them.
const RESERVED_KEYS: &[&str] = &["name", "entry_type", "tags"];

/// Result of getAvailableDirectories.
#[derive(Debug, Clone, Serialize)]
pub struct AvailableDirectories {
    pub directories: Vec<DirectoryDescriptor>,
    pub total_count: usize,
    /// Adaptive documentation for the agent prompt.
    pub documentation: String,
}

/// Result of searchDirectory.
#[derive(Debug, Clone, Serialize)]
pub struct SearchDirectoryResponse {
    /// Number of returned entries (after the limit).
    pub total: usize,
    pub entries: Vec<EntryRecord>,
}

impl SearchDirectoryResponse {
    pub fn empty() -> Self {
        Self {
            total: 0,
            entries: Vec::new(),
        }
    }
}

/// One directory-agnostic record handed to the agent runtime.
///
/// Flat single-level map: `name`, `entry_type`, and `tags` first, then the
/// entry's schema-defined attribute fields and contact fields. On a key
/// collision the contact value wins; the reserved keys are never
/// overwritten by either map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryRecord(pub Map<String, Value>);

impl EntryRecord {
    pub fn flatten(entry: &DirectoryEntry, entry_type: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(entry.name.clone()));
        fields.insert(
            "entry_type".to_string(),
            Value::String(entry_type.to_string()),
        );
        fields.insert(
            "tags".to_string(),
            Value::Array(entry.tags.iter().map(|t| Value::String(t.clone())).collect()),
        );

        for (key, value) in &entry.entry_data {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                fields.insert(key.clone(), value.clone());
            }
        }
        // Contact fields land last so they win collisions with entry_data.
        for (key, value) in &entry.contact_info {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                fields.insert(key.clone(), value.clone());
            }
        }

        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}
