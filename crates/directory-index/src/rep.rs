//! Weighted search representation.
//!
//! Every entry carries a derived term map built from its name, tags, and
//! entry data. The map is rebuilt whenever any of those inputs change and is
//! stored alongside the entry, so reads never observe an entry whose index
//! terms disagree with its content.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tokenizer::analyze;

/// Weight for terms from the entry name.
pub const NAME_WEIGHT: f32 = 1.0;
/// Weight for terms from tags.
pub const TAG_WEIGHT: f32 = 0.4;
/// Weight for terms from string values inside entry data.
pub const DATA_WEIGHT: f32 = 0.2;

/// Stemmed term -> weight map for one entry.
///
/// A term appearing in several fields keeps the highest weight. `BTreeMap`
/// keeps serialization deterministic, which lets the write path compare
/// fresh and stored representations byte for byte.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchRep {
    pub terms: BTreeMap<String, f32>,
}

impl SearchRep {
    /// Build the representation from an entry's indexed fields.
    ///
    /// Only string values from entry data participate, including strings
    /// nested inside arrays and objects. Numbers, booleans, and nulls are
    /// skipped.
    pub fn build(name: &str, tags: &[String], entry_data: &Map<String, Value>) -> Self {
        let mut terms = BTreeMap::new();

        for stem in analyze(name) {
            insert_max(&mut terms, stem, NAME_WEIGHT);
        }
        for tag in tags {
            for stem in analyze(tag) {
                insert_max(&mut terms, stem, TAG_WEIGHT);
            }
        }
        let mut data_text = Vec::new();
        for value in entry_data.values() {
            collect_strings(value, &mut data_text);
        }
        for text in data_text {
            for stem in analyze(&text) {
                insert_max(&mut terms, stem, DATA_WEIGHT);
            }
        }

        Self { terms }
    }

    /// Score this entry against a set of distinct query stems.
    ///
    /// Returns `None` unless every stem is present (or the stem set is
    /// empty); otherwise the sum of matched weights.
    pub fn score(&self, stems: &[String]) -> Option<f32> {
        if stems.is_empty() {
            return None;
        }
        let mut total = 0.0;
        for stem in stems {
            total += self.terms.get(stem)?;
        }
        Some(total)
    }

    /// Weight of a single term, if indexed.
    pub fn weight(&self, term: &str) -> Option<f32> {
        self.terms.get(term).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

fn insert_max(terms: &mut BTreeMap<String, f32>, stem: String, weight: f32) {
    let entry = terms.entry(stem).or_insert(weight);
    if weight > *entry {
        *entry = weight;
    }
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => {
            for item in items {
                collect_strings(item, out);
            }
        }
        Value::Object(map) => {
            for nested in map.values() {
                collect_strings(nested, out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
