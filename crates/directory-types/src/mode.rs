//! Name-matching strategies for directory search.

use serde::{Deserialize, Serialize};

/// How a name query is matched against entry names.
///
/// The default is `substring` so callers that predate ranked matching keep
/// their behavior without opting in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Case-insensitive partial match against the entry name
    #[default]
    Substring,
    /// Case-insensitive full-string equality against the entry name
    Exact,
    /// Stemmed match against the derived search representation, ranked by
    /// weighted relevance
    Fts,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Substring => "substring",
            SearchMode::Exact => "exact",
            SearchMode::Fts => "fts",
        }
    }

    /// Parse from string, returning None for unknown modes.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "substring" => Some(SearchMode::Substring),
            "exact" => Some(SearchMode::Exact),
            "fts" => Some(SearchMode::Fts),
            _ => None,
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown search mode: {}", s))
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
