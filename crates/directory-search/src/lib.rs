//! Query engine for the agent-directory engine.
//!
//! One read entry point: [`QueryEngine::search`] runs a name-matching mode
//! (substring, exact, or ranked fts) AND-composed with tag and attribute
//! filters, scoped to the caller's accessible lists and truncated after
//! deterministic ordering.

pub mod engine;
pub mod error;
pub mod query;

pub use engine::QueryEngine;
pub use error::SearchError;
pub use query::SearchQuery;
