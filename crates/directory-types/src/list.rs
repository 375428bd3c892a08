//! Directory list type.
//!
//! A directory list is a tenant-owned, named collection of entries that all
//! share one entry type. Lists are created by the external import process and
//! are read-only from the search side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A tenant-owned named directory.
///
/// Invariant: (tenant_id, list_name) is unique per deployment; the storage
/// layer enforces this at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryList {
    /// Unique identifier (ULID string)
    pub id: String,

    /// Owning tenant
    pub tenant_id: String,

    /// Name the tenant and its agents refer to this directory by
    pub list_name: String,

    /// Optional tenant-supplied description shown in agent documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Entry-type schema key ("doctor", "phone_contact", ...)
    pub entry_type: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl DirectoryList {
    /// Create a new list with a fresh ULID and current timestamps.
    pub fn new(
        tenant_id: impl Into<String>,
        list_name: impl Into<String>,
        entry_type: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Ulid::new().to_string(),
            tenant_id: tenant_id.into(),
            list_name: list_name.into(),
            description: None,
            entry_type: entry_type.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a tenant-supplied description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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
