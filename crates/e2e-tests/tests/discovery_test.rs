//! Discovery and documentation E2E tests.
//!
//! The documentation block adapts to how many directories resolved: zero
//! yields an explicit stub, one yields the full detailed guide with the
//! vocabulary table, several yield a selection guide without it.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use directory_schema::SchemaRegistry;
use directory_tools::{AgentDirectoryConfig, DirectoryTools};
use directory_types::{DirectoryEntry, SearchSettings};
use e2e_tests::{seed_clinic, seed_phone_book, TestHarness};

fn clinic_tools(harness: &TestHarness) -> DirectoryTools {
    DirectoryTools::new(Arc::clone(&harness.store), SearchSettings::default())
}

#[test]
fn test_zero_directories_stub() {
    let harness = TestHarness::new();
    seed_clinic(&harness.store, "clinic-1");
    let tools = clinic_tools(&harness);

    // Nothing configured.
    let available = tools
        .get_available_directories("clinic-1", &AgentDirectoryConfig::default())
        .unwrap();
    assert_eq!(available.total_count, 0);
    assert!(available.directories.is_empty());
    assert!(available
        .documentation
        .contains("No directories are currently available"));

    // Configured names that do not resolve land in the same place.
    let available = tools
        .get_available_directories("clinic-1", &AgentDirectoryConfig::new(["not_imported"]))
        .unwrap();
    assert_eq!(available.total_count, 0);
    assert!(available
        .documentation
        .contains("No directories are currently available"));

    // The stub still serializes as a complete tool result.
    let wire = serde_json::to_value(&available).unwrap();
    assert_eq!(wire["total_count"], 0);
    assert!(wire["documentation"].as_str().is_some());
}

#[test]
fn test_single_directory_detailed_docs() {
    let harness = TestHarness::new();
    seed_clinic(&harness.store, "clinic-1");
    let tools = clinic_tools(&harness);

    let available = tools
        .get_available_directories("clinic-1", &AgentDirectoryConfig::new(["doctors"]))
        .unwrap();
    let docs = &available.documentation;

    assert!(docs.contains("# Directory: doctors"));
    assert!(docs.contains("5 entries of type `doctor`"));
    assert!(docs.contains("## How to search"));
    // Vocabulary pairs come from the entry-type definition.
    assert!(docs.contains("## Translating caller vocabulary"));
    assert!(docs.contains("\"heart doctor\""));
    assert!(docs.contains("\"cardiology\""));
    // List description wins over the generic purpose text.
    assert!(docs.contains("Physicians available for appointment booking"));
}

#[test]
fn test_multiple_directories_selection_docs() {
    let harness = TestHarness::new();
    seed_clinic(&harness.store, "clinic-1");
    seed_phone_book(&harness.store, "clinic-1");
    let tools = clinic_tools(&harness);

    let available = tools
        .get_available_directories(
            "clinic-1",
            &AgentDirectoryConfig::new(["doctors", "phone_directory"]),
        )
        .unwrap();
    let docs = &available.documentation;

    assert_eq!(available.total_count, 2);
    assert!(docs.contains("# Available directories"));
    assert!(docs.contains("## Choosing a directory"));
    assert!(docs.contains("`doctors`"));
    assert!(docs.contains("`phone_directory`"));
    // Synonym tables are a single-directory feature.
    assert!(!docs.contains("Translating caller vocabulary"));
    assert!(!docs.contains("heart doctor"));
}

#[test]
fn test_descriptor_counts_are_live() {
    let harness = TestHarness::new();
    let list = seed_clinic(&harness.store, "clinic-1");
    let tools = clinic_tools(&harness);
    let config = AgentDirectoryConfig::new(["doctors"]);

    let before = tools
        .get_available_directories("clinic-1", &config)
        .unwrap();
    assert_eq!(before.directories[0].entry_count, 5);

    harness
        .store
        .put_entry(&DirectoryEntry::new(&list.id, "Dr. New Hire"))
        .unwrap();

    let after = tools
        .get_available_directories("clinic-1", &config)
        .unwrap();
    assert_eq!(after.directories[0].entry_count, 6);
}

#[test]
fn test_registry_backs_discovery() {
    // The shipped entry-type definitions discovery draws from.
    assert_eq!(
        SchemaRegistry::known_types(),
        vec!["doctor", "phone_contact", "product"]
    );
    assert!(SchemaRegistry::contains("doctor"));
    assert!(!SchemaRegistry::contains("starship"));

    let schema = SchemaRegistry::get("doctor").unwrap();
    assert!(!schema.synonym_mappings.is_empty());
    assert!(schema.searchable_fields.contains(&"name".to_string()));
}
