//! Write-path consistency E2E tests.
//!
//! The search representation is derived inside the same write as the entry
//! itself, so a search issued immediately after a write always sees the new
//! content. There is no rebuild step to fall behind.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;

use directory_index::stem;
use directory_search::{QueryEngine, SearchQuery};
use directory_types::{DirectoryEntry, SearchMode, SearchSettings};
use e2e_tests::{object, seed_clinic, TestHarness};

fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_new_entry_searchable_immediately() {
    let harness = TestHarness::new();
    let list = seed_clinic(&harness.store, "clinic-1");
    let engine = QueryEngine::new(Arc::clone(&harness.store), SearchSettings::default());
    let scope = vec![list.id.clone()];

    let query = SearchQuery::new()
        .with_name("oncology")
        .with_mode(SearchMode::Fts);
    assert!(engine.search(&scope, &query).unwrap().is_empty());

    harness
        .store
        .put_entry(&DirectoryEntry::new(&list.id, "Dr. Lena Brandt").with_tags(["Oncology"]))
        .unwrap();

    let found = engine.search(&scope, &query).unwrap();
    assert_eq!(names(&found), vec!["Dr. Lena Brandt"]);
}

#[test]
fn test_rename_updates_index_in_same_write() {
    let harness = TestHarness::new();
    let list = seed_clinic(&harness.store, "clinic-1");
    let engine = QueryEngine::new(Arc::clone(&harness.store), SearchSettings::default());
    let scope = vec![list.id.clone()];

    let mut entry = DirectoryEntry::new(&list.id, "Radiology Lab");
    harness.store.put_entry(&entry).unwrap();

    let radiology = SearchQuery::new()
        .with_name("radiology")
        .with_mode(SearchMode::Fts);
    assert_eq!(engine.search(&scope, &radiology).unwrap().len(), 1);

    entry.name = "Imaging Suite".to_string();
    harness.store.put_entry(&entry).unwrap();

    // The old vocabulary stops matching the moment the write lands.
    assert!(engine.search(&scope, &radiology).unwrap().is_empty());

    let imaging = SearchQuery::new()
        .with_name("imaging")
        .with_mode(SearchMode::Fts);
    assert_eq!(
        names(&engine.search(&scope, &imaging).unwrap()),
        vec!["Imaging Suite"]
    );
}

#[test]
fn test_contact_update_leaves_representation_untouched() {
    let harness = TestHarness::new();
    let list = seed_clinic(&harness.store, "clinic-1");

    let mut entry = DirectoryEntry::new(&list.id, "Dr. Noor Khalil")
        .with_tags(["Cardiology"])
        .with_contact_info(object(json!({ "phone": "555-0199" })));
    harness.store.put_entry(&entry).unwrap();

    let before = harness
        .store
        .get_search_rep(&list.id, &entry.id)
        .unwrap()
        .unwrap();

    entry.contact_info = object(json!({ "phone": "555-0200", "pager": "77" }));
    harness.store.put_entry(&entry).unwrap();

    let after = harness
        .store
        .get_search_rep(&list.id, &entry.id)
        .unwrap()
        .unwrap();
    assert_eq!(
        serde_json::to_vec(&before).unwrap(),
        serde_json::to_vec(&after).unwrap()
    );

    // The stored entry itself did change.
    let stored = harness
        .store
        .get_entry(&list.id, &entry.id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.contact_info["pager"], json!("77"));
}

#[test]
fn test_postings_follow_entry_content() {
    let harness = TestHarness::new();
    let list = seed_clinic(&harness.store, "clinic-1");

    let mut entry = DirectoryEntry::new(&list.id, "Allergy Clinic").with_tags(["Immunology"]);
    harness.store.put_entry(&entry).unwrap();

    let term = stem("immunology");
    let postings = harness.store.postings_for_term(&list.id, &term).unwrap();
    assert_eq!(postings.len(), 1);
    assert_eq!(postings[0].0, entry.id);
    assert_eq!(postings[0].1, 0.4);

    entry.tags = vec!["Rheumatology".to_string()];
    harness.store.put_entry(&entry).unwrap();

    assert!(harness
        .store
        .postings_for_term(&list.id, &term)
        .unwrap()
        .is_empty());
    let postings = harness
        .store
        .postings_for_term(&list.id, &stem("rheumatology"))
        .unwrap();
    assert_eq!(postings.len(), 1);
}

#[test]
fn test_delete_removes_entry_from_search() {
    let harness = TestHarness::new();
    let list = seed_clinic(&harness.store, "clinic-1");
    let engine = QueryEngine::new(Arc::clone(&harness.store), SearchSettings::default());
    let scope = vec![list.id.clone()];

    let query = SearchQuery::new()
        .with_name("dermatology")
        .with_mode(SearchMode::Fts);
    let found = engine.search(&scope, &query).unwrap();
    assert_eq!(names(&found), vec!["Dr. Priya Nair"]);
    let target = found[0].id.clone();

    assert!(harness.store.delete_entry(&list.id, &target).unwrap());

    assert!(engine.search(&scope, &query).unwrap().is_empty());
    assert_eq!(harness.store.count_entries(&list.id).unwrap(), 4);
}
