//! RocksDB wrapper for directory storage.
//!
//! Provides:
//! - Database open with column family setup
//! - List creation with (tenant_id, list_name) uniqueness
//! - Entry writes that recompute the derived search representation and its
//!   postings inside the same atomic batch as the content change
//! - Per-list prefix reads

use std::path::Path;

use chrono::Utc;
use rocksdb::{Direction, IteratorMode, Options, WriteBatch, DB};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use directory_index::SearchRep;
use directory_types::{DirectoryEntry, DirectoryList};

use crate::column_families::{
    build_cf_descriptors, CF_ENTRIES, CF_LISTS, CF_LIST_NAMES, CF_POSTINGS,
};
use crate::error::StorageError;
use crate::keys::{EntryKey, ListNameKey, PostingKey};

/// Stored form of a directory entry.
///
/// The public `DirectoryEntry` carries no search representation; it exists
/// only here, so no caller can supply or mutate one. `put_entry` is the
/// single place it is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    #[serde(flatten)]
    entry: DirectoryEntry,
    search_rep: SearchRep,
}

impl StoredEntry {
    fn to_bytes(&self) -> Result<Vec<u8>, StorageError> {
        serde_json::to_vec(self).map_err(StorageError::from)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, StorageError> {
        serde_json::from_slice(bytes).map_err(StorageError::from)
    }
}

/// Main storage interface for directory data
pub struct Store {
    db: DB,
}

impl Store {
    /// Open the store at the given path, creating it if necessary.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        info!("Opening directory store at {:?}", path);

        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);
        db_opts.create_missing_column_families(true);
        db_opts.set_max_background_jobs(4);

        let cf_descriptors = build_cf_descriptors();
        let db = DB::open_cf_descriptors(&db_opts, path, cf_descriptors)?;

        Ok(Self { db })
    }

    // ==================== List Methods ====================

    /// Create a directory list.
    ///
    /// Enforces (tenant_id, list_name) uniqueness through the list_names
    /// column family; the list row and its name mapping are written in one
    /// batch.
    pub fn create_list(&self, list: &DirectoryList) -> Result<(), StorageError> {
        let lists_cf = self
            .db
            .cf_handle(CF_LISTS)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_LISTS.to_string()))?;
        let names_cf = self
            .db
            .cf_handle(CF_LIST_NAMES)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_LIST_NAMES.to_string()))?;

        // Ids and tenant ids share key namespaces with the ':' separator.
        if list.id.contains(':') {
            return Err(StorageError::Key(format!(
                "list ids must not contain ':': {}",
                list.id
            )));
        }
        if list.tenant_id.contains(':') {
            return Err(StorageError::Key(format!(
                "tenant_id must not contain ':': {}",
                list.tenant_id
            )));
        }

        let name_key = ListNameKey::new(&list.tenant_id, &list.list_name);
        if self.db.get_cf(&names_cf, name_key.to_bytes())?.is_some() {
            return Err(StorageError::ListExists {
                tenant_id: list.tenant_id.clone(),
                list_name: list.list_name.clone(),
            });
        }

        let list_bytes = list.to_bytes()?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&lists_cf, list.id.as_bytes(), &list_bytes);
        batch.put_cf(&names_cf, name_key.to_bytes(), list.id.as_bytes());
        self.db.write(batch)?;

        debug!(list_id = %list.id, list_name = %list.list_name, "Created directory list");
        Ok(())
    }

    /// Get a list by id.
    pub fn get_list(&self, list_id: &str) -> Result<Option<DirectoryList>, StorageError> {
        let lists_cf = self
            .db
            .cf_handle(CF_LISTS)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_LISTS.to_string()))?;

        match self.db.get_cf(&lists_cf, list_id.as_bytes())? {
            Some(bytes) => Ok(Some(DirectoryList::from_bytes(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Resolve a (tenant_id, list_name) pair to its list, if any.
    pub fn resolve_list(
        &self,
        tenant_id: &str,
        list_name: &str,
    ) -> Result<Option<DirectoryList>, StorageError> {
        let names_cf = self
            .db
            .cf_handle(CF_LIST_NAMES)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_LIST_NAMES.to_string()))?;

        let name_key = ListNameKey::new(tenant_id, list_name);
        let list_id = match self.db.get_cf(&names_cf, name_key.to_bytes())? {
            Some(bytes) => String::from_utf8(bytes)
                .map_err(|e| StorageError::Key(format!("Invalid list id bytes: {}", e)))?,
            None => return Ok(None),
        };

        self.get_list(&list_id)
    }

    /// All lists owned by a tenant, ordered by list name.
    pub fn lists_for_tenant(&self, tenant_id: &str) -> Result<Vec<DirectoryList>, StorageError> {
        let names_cf = self
            .db
            .cf_handle(CF_LIST_NAMES)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_LIST_NAMES.to_string()))?;

        let prefix = ListNameKey::tenant_prefix(tenant_id);
        let iter = self
            .db
            .iterator_cf(&names_cf, IteratorMode::From(&prefix, Direction::Forward));

        let mut lists = Vec::new();
        for item in iter {
            let (key, value) = item?;
            if !key.starts_with(&prefix) {
                break;
            }
            let list_id = std::str::from_utf8(&value)
                .map_err(|e| StorageError::Key(format!("Invalid list id bytes: {}", e)))?;
            if let Some(list) = self.get_list(list_id)? {
                lists.push(list);
            }
        }

        Ok(lists)
    }

    // ==================== Entry Methods ====================

    /// Insert or update an entry.
    ///
    /// This is the write-path hook keeping the derived search representation
    /// current: when name, tags, or entry_data differ from the stored row
    /// (or the entry is new), the representation is rebuilt and the postings
    /// index is reconciled; otherwise the stored representation is reused
    /// byte for byte. Entry row and postings are committed in one batch, so
    /// no reader can observe content without its matching ranking data.
    ///
    /// On update the stored created_at wins; updated_at is set to now.
    pub fn put_entry(&self, entry: &DirectoryEntry) -> Result<(), StorageError> {
        let entries_cf = self
            .db
            .cf_handle(CF_ENTRIES)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_ENTRIES.to_string()))?;
        let postings_cf = self
            .db
            .cf_handle(CF_POSTINGS)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_POSTINGS.to_string()))?;

        if entry.id.contains(':') || entry.list_id.contains(':') {
            return Err(StorageError::Key(format!(
                "entry ids must not contain ':': {}:{}",
                entry.list_id, entry.id
            )));
        }
        if self.get_list(&entry.list_id)?.is_none() {
            return Err(StorageError::ListNotFound(entry.list_id.clone()));
        }

        let entry_key = EntryKey::new(&entry.list_id, &entry.id);
        let previous = match self.db.get_cf(&entries_cf, entry_key.to_bytes())? {
            Some(bytes) => Some(StoredEntry::from_bytes(&bytes)?),
            None => None,
        };

        let mut stored = StoredEntry {
            entry: entry.clone(),
            search_rep: SearchRep::default(),
        };

        let rebuilt = match &previous {
            Some(prev)
                if prev.entry.name == entry.name
                    && prev.entry.tags == entry.tags
                    && prev.entry.entry_data == entry.entry_data =>
            {
                stored.entry.created_at = prev.entry.created_at;
                stored.entry.updated_at = Utc::now();
                stored.search_rep = prev.search_rep.clone();
                false
            }
            Some(prev) => {
                stored.entry.created_at = prev.entry.created_at;
                stored.entry.updated_at = Utc::now();
                stored.search_rep =
                    SearchRep::build(&entry.name, &entry.tags, &entry.entry_data);
                true
            }
            None => {
                stored.search_rep =
                    SearchRep::build(&entry.name, &entry.tags, &entry.entry_data);
                true
            }
        };

        let mut batch = WriteBatch::default();
        batch.put_cf(&entries_cf, entry_key.to_bytes(), stored.to_bytes()?);

        if rebuilt {
            // Reconcile postings: drop terms no longer present, upsert the rest.
            if let Some(prev) = &previous {
                for term in prev.search_rep.terms.keys() {
                    if !stored.search_rep.terms.contains_key(term) {
                        let key = PostingKey::new(&entry.list_id, term, &entry.id);
                        batch.delete_cf(&postings_cf, key.to_bytes());
                    }
                }
            }
            for (term, weight) in &stored.search_rep.terms {
                let key = PostingKey::new(&entry.list_id, term, &entry.id);
                batch.put_cf(&postings_cf, key.to_bytes(), weight.to_be_bytes());
            }
        }

        self.db.write(batch)?;

        debug!(
            entry_id = %entry.id,
            list_id = %entry.list_id,
            rebuilt,
            created = previous.is_none(),
            "Stored entry"
        );
        Ok(())
    }

    /// Get one entry.
    pub fn get_entry(
        &self,
        list_id: &str,
        entry_id: &str,
    ) -> Result<Option<DirectoryEntry>, StorageError> {
        Ok(self.get_stored(list_id, entry_id)?.map(|s| s.entry))
    }

    /// Delete an entry and its postings in one batch.
    ///
    /// Returns false when the entry did not exist.
    pub fn delete_entry(&self, list_id: &str, entry_id: &str) -> Result<bool, StorageError> {
        let entries_cf = self
            .db
            .cf_handle(CF_ENTRIES)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_ENTRIES.to_string()))?;
        let postings_cf = self
            .db
            .cf_handle(CF_POSTINGS)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_POSTINGS.to_string()))?;

        let stored = match self.get_stored(list_id, entry_id)? {
            Some(stored) => stored,
            None => return Ok(false),
        };

        let entry_key = EntryKey::new(list_id, entry_id);
        let mut batch = WriteBatch::default();
        batch.delete_cf(&entries_cf, entry_key.to_bytes());
        for term in stored.search_rep.terms.keys() {
            let key = PostingKey::new(list_id, term, entry_id);
            batch.delete_cf(&postings_cf, key.to_bytes());
        }
        self.db.write(batch)?;

        debug!(entry_id = %entry_id, list_id = %list_id, "Deleted entry");
        Ok(true)
    }

    /// All entries in a list, ordered by entry id.
    pub fn entries_for_list(&self, list_id: &str) -> Result<Vec<DirectoryEntry>, StorageError> {
        let entries_cf = self
            .db
            .cf_handle(CF_ENTRIES)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_ENTRIES.to_string()))?;

        let prefix = EntryKey::list_prefix(list_id);
        let iter = self
            .db
            .iterator_cf(&entries_cf, IteratorMode::From(&prefix, Direction::Forward));

        let mut entries = Vec::new();
        for item in iter {
            let (key, value) = item?;
            if !key.starts_with(&prefix) {
                break;
            }
            entries.push(StoredEntry::from_bytes(&value)?.entry);
        }

        Ok(entries)
    }

    /// Live entry count for a list.
    pub fn count_entries(&self, list_id: &str) -> Result<usize, StorageError> {
        let entries_cf = self
            .db
            .cf_handle(CF_ENTRIES)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_ENTRIES.to_string()))?;

        let prefix = EntryKey::list_prefix(list_id);
        let iter = self
            .db
            .iterator_cf(&entries_cf, IteratorMode::From(&prefix, Direction::Forward));

        let mut count = 0;
        for item in iter {
            let (key, _) = item?;
            if !key.starts_with(&prefix) {
                break;
            }
            count += 1;
        }

        Ok(count)
    }

    // ==================== Index Methods ====================

    /// Postings for one term within one list: (entry_id, weight) pairs.
    pub fn postings_for_term(
        &self,
        list_id: &str,
        term: &str,
    ) -> Result<Vec<(String, f32)>, StorageError> {
        let postings_cf = self
            .db
            .cf_handle(CF_POSTINGS)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_POSTINGS.to_string()))?;

        let prefix = PostingKey::term_prefix(list_id, term);
        let iter = self
            .db
            .iterator_cf(&postings_cf, IteratorMode::From(&prefix, Direction::Forward));

        let mut postings = Vec::new();
        for item in iter {
            let (key, value) = item?;
            if !key.starts_with(&prefix) {
                break;
            }
            let posting_key = PostingKey::from_bytes(&key)?;
            postings.push((posting_key.entry_id, decode_weight(&value)?));
        }

        Ok(postings)
    }

    /// Read-only view of an entry's derived search representation.
    ///
    /// Diagnostic accessor; nothing outside this crate can write one.
    pub fn get_search_rep(
        &self,
        list_id: &str,
        entry_id: &str,
    ) -> Result<Option<SearchRep>, StorageError> {
        Ok(self.get_stored(list_id, entry_id)?.map(|s| s.search_rep))
    }

    fn get_stored(
        &self,
        list_id: &str,
        entry_id: &str,
    ) -> Result<Option<StoredEntry>, StorageError> {
        let entries_cf = self
            .db
            .cf_handle(CF_ENTRIES)
            .ok_or_else(|| StorageError::ColumnFamilyNotFound(CF_ENTRIES.to_string()))?;

        let entry_key = EntryKey::new(list_id, entry_id);
        match self.db.get_cf(&entries_cf, entry_key.to_bytes())? {
            Some(bytes) => Ok(Some(StoredEntry::from_bytes(&bytes)?)),
            None => Ok(None),
        }
    }
}

fn decode_weight(bytes: &[u8]) -> Result<f32, StorageError> {
    let array: [u8; 4] = bytes
        .try_into()
        .map_err(|_| StorageError::Serialization("posting weight must be 4 bytes".to_string()))?;
    Ok(f32::from_be_bytes(array))
}
