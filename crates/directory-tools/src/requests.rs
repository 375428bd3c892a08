//! Tool call inputs.
//!
//! These deserialize directly from agent tool-call arguments, so every
//! field is optional with a sensible default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use directory_types::SearchMode;

/// The directory-related slice of an agent's configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentDirectoryConfig {
    /// Directory names this agent may search.
    #[serde(default)]
    pub accessible_lists: Vec<String>,
}

impl AgentDirectoryConfig {
    pub fn new<I, S>(accessible_lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accessible_lists: accessible_lists.into_iter().map(Into::into).collect(),
        }
    }
}

/// Arguments of one searchDirectory tool call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchDirectoryRequest {
    /// Name query, interpreted per `search_mode`.
    #[serde(default)]
    pub query: Option<String>,

    /// Required tags (all must be present on a matching entry).
    #[serde(default)]
    pub tags: Vec<String>,

    /// entry_data field -> required value, exact equality.
    #[serde(default)]
    pub attribute_filters: BTreeMap<String, Value>,

    /// Name-matching strategy; defaults to substring.
    #[serde(default)]
    pub search_mode: SearchMode,

    /// Maximum results; 0 means the configured default.
    #[serde(default)]
    pub limit: usize,
}
