//! Vocabulary-matching E2E tests.
//!
//! Callers rarely use the exact words a directory stores. Under fts the
//! engine matches across word forms and ranks name hits above tag hits
//! above attribute hits; substring and exact modes stay literal.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;

use directory_tools::{DirectoryTools, SearchDirectoryRequest, SearchDirectoryResponse};
use directory_types::{DirectoryEntry, DirectoryList, SearchMode, SearchSettings};
use e2e_tests::{object, seed_clinic, TestHarness};

fn response_names(response: &SearchDirectoryResponse) -> Vec<String> {
    response
        .entries
        .iter()
        .filter_map(|r| r.get("name").and_then(|v| v.as_str()).map(String::from))
        .collect()
}

fn fts(query: &str) -> SearchDirectoryRequest {
    SearchDirectoryRequest {
        query: Some(query.to_string()),
        search_mode: SearchMode::Fts,
        ..Default::default()
    }
}

#[test]
fn test_caller_vocabulary_meets_directory_vocabulary() {
    let harness = TestHarness::new();
    seed_clinic(&harness.store, "clinic-1");
    let tools = DirectoryTools::new(Arc::clone(&harness.store), SearchSettings::default());

    // "surgeons" reaches entries that only say "Surgery".
    let response = tools
        .search_directory("clinic-1", "doctors", &fts("surgeons"))
        .unwrap();
    assert_eq!(
        response_names(&response),
        vec!["Dr. Maria Lopez", "Dr. Omar Haddad"]
    );

    // "cardiologists" reaches entries tagged "Cardiology".
    let response = tools
        .search_directory("clinic-1", "doctors", &fts("cardiologists"))
        .unwrap();
    assert_eq!(
        response_names(&response),
        vec!["Dr. Jane Cardio", "Dr. Sam Oduya"]
    );
}

#[test]
fn test_substring_stays_literal() {
    let harness = TestHarness::new();
    seed_clinic(&harness.store, "clinic-1");
    let tools = DirectoryTools::new(Arc::clone(&harness.store), SearchSettings::default());

    // No doctor has "surgeons" in the name, so the default mode finds none.
    let request = SearchDirectoryRequest {
        query: Some("surgeons".to_string()),
        ..Default::default()
    };
    let response = tools
        .search_directory("clinic-1", "doctors", &request)
        .unwrap();
    assert_eq!(response.total, 0);

    // A literal name fragment still works, case-insensitive.
    let request = SearchDirectoryRequest {
        query: Some("ARDI".to_string()),
        ..Default::default()
    };
    let response = tools
        .search_directory("clinic-1", "doctors", &request)
        .unwrap();
    assert_eq!(response_names(&response), vec!["Dr. Jane Cardio"]);
}

#[test]
fn test_exact_requires_full_name() {
    let harness = TestHarness::new();
    seed_clinic(&harness.store, "clinic-1");
    let tools = DirectoryTools::new(Arc::clone(&harness.store), SearchSettings::default());

    let full = SearchDirectoryRequest {
        query: Some("dr. priya nair".to_string()),
        search_mode: SearchMode::Exact,
        ..Default::default()
    };
    let response = tools
        .search_directory("clinic-1", "doctors", &full)
        .unwrap();
    assert_eq!(response_names(&response), vec!["Dr. Priya Nair"]);

    let partial = SearchDirectoryRequest {
        query: Some("priya".to_string()),
        search_mode: SearchMode::Exact,
        ..Default::default()
    };
    let response = tools
        .search_directory("clinic-1", "doctors", &partial)
        .unwrap();
    assert_eq!(response.total, 0);
}

#[test]
fn test_fts_ranks_name_over_tag_over_attribute() {
    let harness = TestHarness::new();
    let list = DirectoryList::new("rank-demo", "doctors", "doctor");
    harness.store.create_list(&list).unwrap();
    harness
        .store
        .put_entry(&DirectoryEntry::new(&list.id, "Surgery Pavilion"))
        .unwrap();
    harness
        .store
        .put_entry(&DirectoryEntry::new(&list.id, "Dr. Field").with_tags(["Surgery"]))
        .unwrap();
    harness
        .store
        .put_entry(
            &DirectoryEntry::new(&list.id, "Dr. Grant")
                .with_entry_data(object(json!({ "specialty": "Surgery" }))),
        )
        .unwrap();

    let tools = DirectoryTools::new(Arc::clone(&harness.store), SearchSettings::default());
    let response = tools
        .search_directory("rank-demo", "doctors", &fts("surgery"))
        .unwrap();
    assert_eq!(
        response_names(&response),
        vec!["Surgery Pavilion", "Dr. Field", "Dr. Grant"]
    );
}

#[test]
fn test_every_query_term_must_match() {
    let harness = TestHarness::new();
    seed_clinic(&harness.store, "clinic-1");
    let tools = DirectoryTools::new(Arc::clone(&harness.store), SearchSettings::default());

    // Both terms hit Dr. Maria Lopez: "lopez" in the name, "surgery" as a tag.
    let response = tools
        .search_directory("clinic-1", "doctors", &fts("lopez surgery"))
        .unwrap();
    assert_eq!(response_names(&response), vec!["Dr. Maria Lopez"]);

    // Terms satisfied only by different entries match nothing.
    let response = tools
        .search_directory("clinic-1", "doctors", &fts("haddad cardiology"))
        .unwrap();
    assert_eq!(response.total, 0);
}
