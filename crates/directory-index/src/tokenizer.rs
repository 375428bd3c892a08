//! Tokenization and analysis.
//!
//! Entries and queries pass through the same pipeline so index terms and
//! query terms always agree: lowercase, split on non-alphanumeric, drop
//! single-character fragments, then stem.

use std::collections::HashSet;

use crate::stemmer::stem;

/// Split text into lowercase alphanumeric tokens at least two characters long.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(String::from)
        .collect()
}

/// Tokenize and stem, preserving duplicates and order.
pub fn analyze(text: &str) -> Vec<String> {
    tokenize(text).iter().map(|t| stem(t)).collect()
}

/// Analyze a query into distinct stems, first occurrence order.
pub fn query_stems(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    analyze(query)
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
