//! # directory-index
//!
//! Text analysis and the derived search representation for directory entries.
//!
//! Provides:
//! - A tokenizer (lowercase, alphanumeric runs, minimum length 2)
//! - A light suffix-stripping stemmer applied identically at index and query
//!   time, so "surgeons", "surgeon", "surgery", and "surgeries" all rank
//!   against the same term
//! - [`SearchRep`]: the weighted term map derived from an entry's name, tags,
//!   and attribute data, with name matches always outweighing tag matches and
//!   tag matches always outweighing attribute-data matches
//!
//! The storage layer rebuilds a `SearchRep` inside every content-changing
//! write; the query engine analyzes `fts` queries with the same pipeline and
//! scores candidates against the stored representation.

pub mod rep;
pub mod stemmer;
pub mod tokenizer;

pub use rep::{SearchRep, DATA_WEIGHT, NAME_WEIGHT, TAG_WEIGHT};
pub use stemmer::stem;
pub use tokenizer::{analyze, query_stems, tokenize};
