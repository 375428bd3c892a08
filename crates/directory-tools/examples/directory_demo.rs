//! Demo: import a clinic directory and search it
//!
//! Usage:
//! ```bash
//! cargo run --example directory_demo
//! ```
//!
//! Opens a throwaway store, imports a small doctors directory, prints the
//! generated agent documentation, and runs a few searches the way an agent
//! tool call would.

use std::sync::Arc;

use serde_json::json;

use directory_storage::Store;
use directory_tools::{AgentDirectoryConfig, DirectoryTools, SearchDirectoryRequest};
use directory_types::{DirectoryEntry, DirectoryList, SearchMode, SearchSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let temp_dir = tempfile::TempDir::new()?;
    let store = Arc::new(Store::open(temp_dir.path())?);

    println!("Opened store at {}", temp_dir.path().display());
    println!();

    let list = DirectoryList::new("demo-clinic", "doctors", "doctor")
        .with_description("Physicians available for appointment booking");
    store.create_list(&list)?;

    let doctors = [
        ("Dr. Jane Cardio", "Cardiology", "female", "555-0101"),
        ("Dr. Maria Lopez", "Surgery", "female", "555-0102"),
        ("Dr. Omar Haddad", "Surgery", "male", "555-0103"),
        ("Dr. Priya Nair", "Dermatology", "female", "555-0104"),
    ];

    println!("Importing {} doctors...", doctors.len());
    for (name, specialty, gender, phone) in doctors {
        let entry = DirectoryEntry::new(&list.id, name)
            .with_tags([specialty])
            .with_entry_data(
                json!({"specialty": specialty, "gender": gender})
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
            )
            .with_contact_info(
                json!({"phone": phone})
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
            );
        store.put_entry(&entry)?;
        println!("  {} ({})", name, specialty);
    }
    println!();

    let tools = DirectoryTools::new(store, SearchSettings::default());
    let config = AgentDirectoryConfig::new(["doctors"]);

    let available = tools.get_available_directories("demo-clinic", &config)?;
    println!(
        "Agent sees {} directory(ies). Generated documentation:",
        available.total_count
    );
    println!();
    println!("{}", available.documentation);
    println!();

    let searches = [
        ("substring 'cardio'", SearchDirectoryRequest {
            query: Some("cardio".to_string()),
            ..Default::default()
        }),
        ("fts 'surgeons'", SearchDirectoryRequest {
            query: Some("surgeons".to_string()),
            search_mode: SearchMode::Fts,
            ..Default::default()
        }),
        ("fts 'surgeons' + gender=female", SearchDirectoryRequest {
            query: Some("surgeons".to_string()),
            search_mode: SearchMode::Fts,
            attribute_filters: [("gender".to_string(), json!("female"))].into(),
            ..Default::default()
        }),
    ];

    for (label, request) in searches {
        let response = tools.search_directory("demo-clinic", "doctors", &request)?;
        println!("Search {}: {} result(s)", label, response.total);
        for record in &response.entries {
            let name = record.get("name").and_then(|v| v.as_str()).unwrap_or("?");
            let phone = record.get("phone").and_then(|v| v.as_str()).unwrap_or("-");
            println!("  {} (phone {})", name, phone);
        }
        println!();
    }

    Ok(())
}
