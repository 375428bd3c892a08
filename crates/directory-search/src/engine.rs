//! Query engine: the single scoped read entry point.
//!
//! Scoping is structural: every read below here is a prefix scan keyed by a
//! list id drawn from the caller-supplied accessible set, so there is no
//! code path that could touch another list's rows. Ranked (fts) matching
//! reads the postings index the write path maintains; the other modes scan
//! the accessible lists' entries directly.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use directory_index::query_stems;
use directory_storage::Store;
use directory_types::{DirectoryEntry, SearchMode, SearchSettings};

use crate::error::SearchError;
use crate::query::SearchQuery;

/// Executes scoped searches against the store.
pub struct QueryEngine {
    store: Arc<Store>,
    settings: SearchSettings,
}

impl QueryEngine {
    pub fn new(store: Arc<Store>, settings: SearchSettings) -> Self {
        Self { store, settings }
    }

    /// Search the accessible lists.
    ///
    /// All supplied filters AND-compose. An empty accessible set returns
    /// empty without touching storage. Results are deterministic: ranked
    /// mode orders by score descending then name then id; every other mode
    /// orders by case-insensitive name then id. Truncation to the effective
    /// limit happens after ordering.
    pub fn search(
        &self,
        accessible_list_ids: &[String],
        query: &SearchQuery,
    ) -> Result<Vec<DirectoryEntry>, SearchError> {
        if accessible_list_ids.is_empty() {
            return Ok(Vec::new());
        }

        // Visit each list once even if the caller repeats ids.
        let mut seen = HashSet::new();
        let scope: Vec<&str> = accessible_list_ids
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect();

        let limit = self.effective_limit(query.limit);
        debug!(
            lists = scope.len(),
            mode = %query.mode,
            limit,
            "Executing directory search"
        );

        let results = match (&query.name_query, query.mode) {
            (Some(name_query), SearchMode::Fts) => {
                self.search_ranked(&scope, name_query, query, limit)?
            }
            _ => self.search_scan(&scope, query, limit)?,
        };

        debug!(results = results.len(), "Search complete");
        Ok(results)
    }

    /// Requested limit, with 0 falling back to the configured default and
    /// everything capped at the configured maximum.
    fn effective_limit(&self, requested: usize) -> usize {
        let limit = if requested > 0 {
            requested
        } else {
            self.settings.default_limit
        };
        limit.min(self.settings.max_limit)
    }

    /// Substring/exact/query-less path: scan accessible lists, filter,
    /// order by name.
    fn search_scan(
        &self,
        scope: &[&str],
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<DirectoryEntry>, SearchError> {
        let name_lower = query.name_query.as_ref().map(|q| q.to_lowercase());

        let mut results = Vec::new();
        for list_id in scope {
            for entry in self.store.entries_for_list(list_id)? {
                if !name_matches(&entry, name_lower.as_deref(), query.mode) {
                    continue;
                }
                if !passes_filters(&entry, query) {
                    continue;
                }
                results.push(entry);
            }
        }

        results.sort_by_cached_key(|e| (e.name.to_lowercase(), e.id.clone()));
        results.truncate(limit);
        Ok(results)
    }

    /// fts path: intersect postings for every query stem, sum weights,
    /// filter, order by score.
    fn search_ranked(
        &self,
        scope: &[&str],
        name_query: &str,
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<DirectoryEntry>, SearchError> {
        let stems = query_stems(name_query);
        if stems.is_empty() {
            // Nothing survived normalization, so nothing can match.
            return Ok(Vec::new());
        }

        let mut scored: Vec<(f32, DirectoryEntry)> = Vec::new();
        for list_id in scope {
            // entry_id -> accumulated score; every stem must contribute.
            let mut candidates: HashMap<String, f32> = HashMap::new();
            for (i, stem) in stems.iter().enumerate() {
                let postings = self.store.postings_for_term(list_id, stem)?;
                if i == 0 {
                    candidates = postings.into_iter().collect();
                } else {
                    let matched: HashMap<String, f32> = postings.into_iter().collect();
                    candidates.retain(|entry_id, score| match matched.get(entry_id) {
                        Some(weight) => {
                            *score += *weight;
                            true
                        }
                        None => false,
                    });
                }
                if candidates.is_empty() {
                    break;
                }
            }

            for (entry_id, score) in candidates {
                let Some(entry) = self.store.get_entry(list_id, &entry_id)? else {
                    continue;
                };
                if passes_filters(&entry, query) {
                    scored.push((score, entry));
                }
            }
        }

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.name.to_lowercase().cmp(&b.1.name.to_lowercase()))
                .then_with(|| a.1.id.cmp(&b.1.id))
        });

        Ok(scored.into_iter().map(|(_, entry)| entry).take(limit).collect())
    }
}

fn name_matches(entry: &DirectoryEntry, name_lower: Option<&str>, mode: SearchMode) -> bool {
    let Some(query) = name_lower else {
        return true;
    };
    match mode {
        SearchMode::Substring => entry.name.to_lowercase().contains(query),
        SearchMode::Exact => entry.name.trim().to_lowercase() == query.trim(),
        // A ranked query never reaches the scan path; a query-less fts
        // search does, and applies no name predicate.
        SearchMode::Fts => true,
    }
}

fn passes_filters(entry: &DirectoryEntry, query: &SearchQuery) -> bool {
    tags_match(entry, &query.tags) && attributes_match(entry, &query.attribute_filters)
}

/// Entry tags must contain every required tag (intersection semantics).
fn tags_match(entry: &DirectoryEntry, required: &[String]) -> bool {
    required.iter().all(|tag| entry.tags.contains(tag))
}

/// entry_data values must equal the expected values exactly. A missing key
/// or a type mismatch is a non-match, never an error.
fn attributes_match(entry: &DirectoryEntry, filters: &BTreeMap<String, Value>) -> bool {
    filters
        .iter()
        .all(|(key, expected)| entry.entry_data.get(key) == Some(expected))
}
