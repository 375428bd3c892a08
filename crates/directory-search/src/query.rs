//! Query description and builder.

use std::collections::BTreeMap;

use serde_json::Value;

use directory_types::SearchMode;

/// One search request against a set of accessible lists.
///
/// Every filter is optional and all supplied filters must hold for an entry
/// to match. `limit == 0` means "use the configured default".
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Name filter; interpreted per `mode`. None applies no name predicate.
    pub name_query: Option<String>,
    /// Required tags; an entry matches only if its tags contain every one.
    pub tags: Vec<String>,
    /// entry_data key -> expected value, strict equality, no coercion.
    pub attribute_filters: BTreeMap<String, Value>,
    /// Name-matching strategy.
    pub mode: SearchMode,
    /// Maximum results after ranking; 0 falls back to the configured default.
    pub limit: usize,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name_query: impl Into<String>) -> Self {
        self.name_query = Some(name_query.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attribute_filters.insert(key.into(), value);
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
