//! Scoping E2E tests.
//!
//! Every search runs inside an explicit set of accessible lists. Tenants
//! sharing a store never see each other's entries, and an empty accessible
//! set returns nothing regardless of what the store holds.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use directory_search::{QueryEngine, SearchQuery};
use directory_tools::{DirectoryTools, SearchDirectoryRequest};
use directory_types::{DirectoryEntry, SearchMode, SearchSettings};
use e2e_tests::{seed_clinic, TestHarness};

#[test]
fn test_tenants_are_isolated() {
    let harness = TestHarness::new();
    seed_clinic(&harness.store, "clinic-east");
    let west = seed_clinic(&harness.store, "clinic-west");

    // Give west a doctor east does not have.
    harness
        .store
        .put_entry(&DirectoryEntry::new(&west.id, "Dr. West Only"))
        .unwrap();

    let tools = DirectoryTools::new(Arc::clone(&harness.store), SearchSettings::default());
    let request = SearchDirectoryRequest {
        query: Some("west only".to_string()),
        ..Default::default()
    };

    let east_response = tools
        .search_directory("clinic-east", "doctors", &request)
        .unwrap();
    assert_eq!(east_response.total, 0);

    let west_response = tools
        .search_directory("clinic-west", "doctors", &request)
        .unwrap();
    assert_eq!(west_response.total, 1);
}

#[test]
fn test_empty_scope_returns_nothing() {
    let harness = TestHarness::new();
    let list = seed_clinic(&harness.store, "clinic-1");
    let engine = QueryEngine::new(Arc::clone(&harness.store), SearchSettings::default());

    let query = SearchQuery::new();
    assert!(engine.search(&[], &query).unwrap().is_empty());
    assert_eq!(engine.search(&[list.id.clone()], &query).unwrap().len(), 5);
}

#[test]
fn test_scope_union_and_dedupe() {
    let harness = TestHarness::new();
    let east = seed_clinic(&harness.store, "clinic-east");
    let west = seed_clinic(&harness.store, "clinic-west");
    let engine = QueryEngine::new(Arc::clone(&harness.store), SearchSettings::default());

    let query = SearchQuery::new()
        .with_name("surgery")
        .with_mode(SearchMode::Fts);

    // Union across lists.
    let both = engine
        .search(&[east.id.clone(), west.id.clone()], &query)
        .unwrap();
    assert_eq!(both.len(), 4);

    // Repeating a list id does not duplicate its entries.
    let repeated = engine
        .search(&[east.id.clone(), east.id.clone()], &query)
        .unwrap();
    assert_eq!(repeated.len(), 2);
}

#[test]
fn test_unknown_list_id_contributes_nothing() {
    let harness = TestHarness::new();
    let list = seed_clinic(&harness.store, "clinic-1");
    let engine = QueryEngine::new(Arc::clone(&harness.store), SearchSettings::default());

    let scope = vec![list.id.clone(), "no-such-list".to_string()];
    let results = engine.search(&scope, &SearchQuery::new()).unwrap();
    assert_eq!(results.len(), 5);

    let ranked = SearchQuery::new()
        .with_name("surgery")
        .with_mode(SearchMode::Fts);
    assert_eq!(engine.search(&scope, &ranked).unwrap().len(), 2);
}
