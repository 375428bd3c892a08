//! Key encoding and decoding for the storage layer.
//!
//! Key formats:
//! - list_names: `{tenant_id}:{list_name}`
//! - entries:    `{list_id}:{entry_id}`
//! - postings:   `{list_id}:{term}:{entry_id}`
//!
//! List and entry ids are ULID strings and index terms are lowercase
//! alphanumeric tokens, so none of them contains `:`. Tenant ids must not
//! contain `:` either; the store rejects ones that do. Keys sharing a list
//! id therefore share a clean prefix, making every per-list read a RocksDB
//! prefix scan that cannot touch another list's rows.

use crate::error::StorageError;

/// Key for list-name resolution.
/// Format: `{tenant_id}:{list_name}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNameKey {
    pub tenant_id: String,
    pub list_name: String,
}

impl ListNameKey {
    pub fn new(tenant_id: impl Into<String>, list_name: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            list_name: list_name.into(),
        }
    }

    /// Encode key to bytes for storage
    pub fn to_bytes(&self) -> Vec<u8> {
        format!("{}:{}", self.tenant_id, self.list_name).into_bytes()
    }

    /// Decode key from bytes. The list name keeps any embedded `:`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        let s = std::str::from_utf8(bytes)
            .map_err(|e| StorageError::Key(format!("Invalid UTF-8: {}", e)))?;
        let (tenant_id, list_name) = s
            .split_once(':')
            .ok_or_else(|| StorageError::Key(format!("Invalid list name key: {}", s)))?;
        Ok(Self::new(tenant_id, list_name))
    }

    /// Prefix covering every list name owned by a tenant
    pub fn tenant_prefix(tenant_id: &str) -> Vec<u8> {
        format!("{}:", tenant_id).into_bytes()
    }
}

/// Key for entry storage.
/// Format: `{list_id}:{entry_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryKey {
    pub list_id: String,
    pub entry_id: String,
}

impl EntryKey {
    pub fn new(list_id: impl Into<String>, entry_id: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            entry_id: entry_id.into(),
        }
    }

    /// Encode key to bytes for storage
    pub fn to_bytes(&self) -> Vec<u8> {
        format!("{}:{}", self.list_id, self.entry_id).into_bytes()
    }

    /// Decode key from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        let s = std::str::from_utf8(bytes)
            .map_err(|e| StorageError::Key(format!("Invalid UTF-8: {}", e)))?;
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            return Err(StorageError::Key(format!("Invalid entry key format: {}", s)));
        }
        Ok(Self::new(parts[0], parts[1]))
    }

    /// Prefix covering every entry in a list
    pub fn list_prefix(list_id: &str) -> Vec<u8> {
        format!("{}:", list_id).into_bytes()
    }
}

/// Key for one posting (one indexed term of one entry).
/// Format: `{list_id}:{term}:{entry_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingKey {
    pub list_id: String,
    pub term: String,
    pub entry_id: String,
}

impl PostingKey {
    pub fn new(
        list_id: impl Into<String>,
        term: impl Into<String>,
        entry_id: impl Into<String>,
    ) -> Self {
        Self {
            list_id: list_id.into(),
            term: term.into(),
            entry_id: entry_id.into(),
        }
    }

    /// Encode key to bytes for storage
    pub fn to_bytes(&self) -> Vec<u8> {
        format!("{}:{}:{}", self.list_id, self.term, self.entry_id).into_bytes()
    }

    /// Decode key from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        let s = std::str::from_utf8(bytes)
            .map_err(|e| StorageError::Key(format!("Invalid UTF-8: {}", e)))?;
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(StorageError::Key(format!(
                "Invalid posting key format: {}",
                s
            )));
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    /// Prefix covering every posting for one term within one list
    pub fn term_prefix(list_id: &str, term: &str) -> Vec<u8> {
        format!("{}:{}:", list_id, term).into_bytes()
    }
}
