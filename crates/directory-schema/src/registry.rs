//! Load-once schema registry.
//!
//! Definitions are bundled into the binary and parsed into an immutable
//! lookup table on first access. A lookup for an entry type with no
//! definition is a configuration defect, not a transient condition, so it
//! surfaces as an error with no fallback.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::SchemaError;
use crate::types::EntryTypeSchema;

/// Embedded definitions, one TOML document per entry type.
const DEFINITIONS: &[(&str, &str)] = &[
    ("doctor", include_str!("../definitions/doctor.toml")),
    ("phone_contact", include_str!("../definitions/phone_contact.toml")),
    ("product", include_str!("../definitions/product.toml")),
];

static REGISTRY: OnceLock<Result<HashMap<String, EntryTypeSchema>, SchemaError>> = OnceLock::new();

/// Lookup surface over the bundled entry-type definitions.
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// Get the schema for an entry type.
    ///
    /// Returns [`SchemaError::UnknownEntryType`] when no definition is
    /// bundled for `entry_type`. Callers must propagate this, not mask it.
    pub fn get(entry_type: &str) -> Result<&'static EntryTypeSchema, SchemaError> {
        let registry = load()?;
        registry
            .get(entry_type)
            .ok_or_else(|| SchemaError::UnknownEntryType(entry_type.to_string()))
    }

    /// Whether a definition exists for this entry type.
    pub fn contains(entry_type: &str) -> bool {
        load().map(|r| r.contains_key(entry_type)).unwrap_or(false)
    }

    /// All registered entry types, sorted.
    pub fn known_types() -> Vec<&'static str> {
        let mut types: Vec<&'static str> = match load() {
            Ok(registry) => registry.keys().map(String::as_str).collect(),
            Err(_) => Vec::new(),
        };
        types.sort_unstable();
        types
    }
}

fn load() -> Result<&'static HashMap<String, EntryTypeSchema>, SchemaError> {
    REGISTRY
        .get_or_init(parse_definitions)
        .as_ref()
        .map_err(Clone::clone)
}

fn parse_definitions() -> Result<HashMap<String, EntryTypeSchema>, SchemaError> {
    let mut registry = HashMap::new();
    for (name, source) in DEFINITIONS {
        let schema: EntryTypeSchema =
            toml::from_str(source).map_err(|e| SchemaError::InvalidDefinition {
                entry_type: (*name).to_string(),
                message: e.to_string(),
            })?;
        if schema.entry_type != *name {
            return Err(SchemaError::InvalidDefinition {
                entry_type: (*name).to_string(),
                message: format!("definition declares entry_type '{}'", schema.entry_type),
            });
        }
        registry.insert(schema.entry_type.clone(), schema);
    }
    debug!(types = registry.len(), "Loaded entry type schemas");
    Ok(registry)
}
