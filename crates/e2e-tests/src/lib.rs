//! End-to-end test infrastructure for the directory engine.
//!
//! Provides a shared TestHarness and seed helpers for tests covering the
//! full import-to-search pipeline.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use directory_storage::Store;
use directory_types::{DirectoryEntry, DirectoryList};

/// Shared test harness for E2E tests.
///
/// Owns the temp directory and the store. Seed helpers below build tenant
/// layouts on top of it.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    /// Shared store instance
    pub store: Arc<Store>,
}

impl TestHarness {
    /// Create a new test harness with temp directory and store.
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(Store::open(temp_dir.path()).expect("Failed to open test store"));

        Self {
            _temp_dir: temp_dir,
            store,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Clone a JSON object literal into the map form the entry builders take.
pub fn object(value: Value) -> Map<String, Value> {
    value.as_object().expect("Expected a JSON object").clone()
}

/// Seed a doctors directory for the given tenant.
///
/// Five physicians with a spread of specialties, genders, and contact
/// details, covering substring, stemmed, and filtered search cases.
pub fn seed_clinic(store: &Store, tenant_id: &str) -> DirectoryList {
    let list = DirectoryList::new(tenant_id, "doctors", "doctor")
        .with_description("Physicians available for appointment booking");
    store
        .create_list(&list)
        .expect("Failed to create doctors list");

    let doctors = [
        ("Dr. Jane Cardio", "Cardiology", "female", 12, "555-0101"),
        ("Dr. Maria Lopez", "Surgery", "female", 8, "555-0102"),
        ("Dr. Omar Haddad", "Surgery", "male", 15, "555-0103"),
        ("Dr. Priya Nair", "Dermatology", "female", 6, "555-0104"),
        ("Dr. Sam Oduya", "Cardiology", "male", 20, "555-0105"),
    ];

    for (name, specialty, gender, years, phone) in doctors {
        let entry = DirectoryEntry::new(&list.id, name)
            .with_tags([specialty])
            .with_entry_data(object(json!({
                "specialty": specialty,
                "gender": gender,
                "years_experience": years,
            })))
            .with_contact_info(object(json!({ "phone": phone })));
        store.put_entry(&entry).expect("Failed to put doctor entry");
    }

    list
}

/// Seed a phone directory for the given tenant.
pub fn seed_phone_book(store: &Store, tenant_id: &str) -> DirectoryList {
    let list = DirectoryList::new(tenant_id, "phone_directory", "phone_contact");
    store
        .create_list(&list)
        .expect("Failed to create phone directory");

    let contacts = [
        ("Front Desk", "100"),
        ("Billing Office", "220"),
        ("Pharmacy", "310"),
    ];

    for (name, extension) in contacts {
        let entry = DirectoryEntry::new(&list.id, name)
            .with_entry_data(object(json!({ "department": name })))
            .with_contact_info(object(json!({ "extension": extension })));
        store
            .put_entry(&entry)
            .expect("Failed to put contact entry");
    }

    list
}

/// Create N entries with ordered ids, 100ms apart.
///
/// Ids are ULIDs built from sequential timestamps so insertion order and
/// id order agree, which keeps ordering assertions stable.
pub fn create_bulk_entries(list_id: &str, count: usize, base_name: &str) -> Vec<DirectoryEntry> {
    let base_ts: u64 = 1_737_072_000_000; // 2025-01-17 approx
    let mut entries = Vec::with_capacity(count);

    for i in 0..count {
        let ulid = ulid::Ulid::from_parts(base_ts + (i as u64 * 100), rand::random());
        let mut entry = DirectoryEntry::new(list_id, format!("{} {:03}", base_name, i));
        entry.id = ulid.to_string();
        entries.push(entry);
    }

    entries
}
