//! Directory entry type.
//!
//! One structured record inside a directory list: a display name, an ordered
//! tag set, free-form contact fields, and attribute data shaped by the list's
//! entry-type schema.
//!
//! The derived search representation is deliberately NOT part of this type.
//! It lives inside the storage layer's private record and is recomputed there
//! on every content-changing write, so no caller can set or desynchronize it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ulid::Ulid;

/// A single directory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Unique identifier (ULID string)
    pub id: String,

    /// Parent directory list
    pub list_id: String,

    /// Display name; the target of all name-matching strategies
    pub name: String,

    /// Ordered, deduplicated tag set (intersection-tested by search)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-form contact fields (phone, email, address, ...)
    #[serde(default)]
    pub contact_info: Map<String, Value>,

    /// Attribute data shaped by the list's entry-type schema
    #[serde(default)]
    pub entry_data: Map<String, Value>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl DirectoryEntry {
    /// Create a new entry with a fresh ULID and current timestamps.
    pub fn new(list_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Ulid::new().to_string(),
            list_id: list_id.into(),
            name: name.into(),
            tags: Vec::new(),
            contact_info: Map::new(),
            entry_data: Map::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set tags, trimming whitespace and dropping empty/duplicate values
    /// while preserving first-occurrence order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = normalize_tags(tags);
        self
    }

    /// Set the contact field map.
    pub fn with_contact_info(mut self, contact_info: Map<String, Value>) -> Self {
        self.contact_info = contact_info;
        self
    }

    /// Set the schema-shaped attribute map.
    pub fn with_entry_data(mut self, entry_data: Map<String, Value>) -> Self {
        self.entry_data = entry_data;
        self
    }

    /// Serialize to JSON bytes for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize from JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// Normalize a tag collection: trim, drop empties, dedupe preserving order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .map(|t| t.into().trim().to_string())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_entry() -> DirectoryEntry {
        let mut entry_data = Map::new();
        entry_data.insert("specialty".to_string(), json!("Cardiology"));
        entry_data.insert("languages".to_string(), json!(["English", "Spanish"]));

        let mut contact_info = Map::new();
        contact_info.insert("phone".to_string(), json!("+1-555-0101"));

        DirectoryEntry::new("list-1", "Dr. Jane Cardio")
            .with_tags(["Cardiology", "female"])
            .with_contact_info(contact_info)
            .with_entry_data(entry_data)
    }

    #[test]
    fn test_entry_serialization_roundtrip() {
        let entry = sample_entry();
        let bytes = entry.to_bytes().unwrap();
        let decoded = DirectoryEntry::from_bytes(&bytes).unwrap();
        assert_eq!(entry, decoded);
    }

    #[test]
    fn test_tags_normalized() {
        let entry = DirectoryEntry::new("list-1", "Dr. A")
            .with_tags(["  Cardiology ", "female", "Cardiology", "", "  "]);
        assert_eq!(entry.tags, vec!["Cardiology", "female"]);
    }

    #[test]
    fn test_defaults_empty() {
        let entry = DirectoryEntry::new("list-1", "Dr. A");
        assert!(entry.tags.is_empty());
        assert!(entry.contact_info.is_empty());
        assert!(entry.entry_data.is_empty());
    }

    #[test]
    fn test_missing_maps_deserialize_as_empty() {
        // Rows written before contact_info/entry_data existed decode cleanly.
        let entry = sample_entry();
        let mut value = serde_json::to_value(&entry).unwrap();
        value.as_object_mut().unwrap().remove("contact_info");
        value.as_object_mut().unwrap().remove("tags");

        let decoded: DirectoryEntry = serde_json::from_value(value).unwrap();
        assert!(decoded.contact_info.is_empty());
        assert!(decoded.tags.is_empty());
        assert_eq!(decoded.entry_data, entry.entry_data);
    }
}
