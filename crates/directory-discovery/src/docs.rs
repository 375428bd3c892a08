//! Adaptive documentation text.
//!
//! The output is consumed inside an LLM prompt, so its shape follows the
//! number of available directories: a single directory affords a detailed
//! strategy document with the full vocabulary translation table; several
//! directories get a selection header and brief summaries without synonym
//! tables; none gets an explicit stub so a downstream prompt assembler can
//! never mistake the result for a disabled feature.

use directory_schema::EntryTypeSchema;

use crate::descriptor::DirectoryDescriptor;

/// Documentation emitted when no accessible directory resolved.
pub fn no_directories_stub() -> String {
    let lines = vec![
        "# Directory search".to_string(),
        String::new(),
        "No directories are currently available for this agent.".to_string(),
        "Directory search will return empty results until directories are imported.".to_string(),
    ];
    lines.join("\n")
}

/// Detailed strategy document for a lone directory, synonym table included.
pub fn single_directory(descriptor: &DirectoryDescriptor, schema: &EntryTypeSchema) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# Directory: {}", descriptor.list_name));
    lines.push(String::new());
    lines.push(descriptor.description.clone());
    lines.push(String::new());
    lines.push(format!(
        "{} of type `{}`.",
        entry_count_phrase(descriptor.entry_count),
        descriptor.entry_type
    ));

    lines.push(String::new());
    lines.push("## When to use this directory".to_string());
    for use_case in &descriptor.use_cases {
        lines.push(format!("- {}", use_case));
    }

    if !descriptor.not_for.is_empty() {
        lines.push(String::new());
        lines.push("## Not for".to_string());
        for item in &descriptor.not_for {
            lines.push(format!("- {}", item));
        }
    }

    lines.push(String::new());
    lines.push("## How to search".to_string());
    lines.push(format!(
        "Searchable fields: {}.",
        descriptor.searchable_fields.join(", ")
    ));
    lines.push("- `substring` (default) matches partial names, case-insensitive.".to_string());
    lines.push("- `exact` matches a complete name, case-insensitive.".to_string());
    lines.push(
        "- `fts` matches by words: related word forms count, and name matches rank first."
            .to_string(),
    );
    lines.push(
        "- `tags` and `attribute_filters` narrow any mode; every filter must hold.".to_string(),
    );

    if !schema.synonym_mappings.is_empty() {
        lines.push(String::new());
        lines.push("## Translating caller vocabulary".to_string());
        lines.push("Callers rarely use formal terms. Translate before searching:".to_string());
        for mapping in &schema.synonym_mappings {
            lines.push(format!(
                "- {} -> search {}",
                quoted_list(&mapping.informal_terms),
                quoted_list(&mapping.formal_terms)
            ));
        }
    }

    if !descriptor.example_queries.is_empty() {
        lines.push(String::new());
        lines.push("## Example queries".to_string());
        for example in &descriptor.example_queries {
            lines.push(format!("- {}", example));
        }
    }

    lines.join("\n")
}

/// Selection header plus brief summaries. Synonym tables are deliberately
/// omitted to bound prompt size.
pub fn multi_directory(descriptors: &[DirectoryDescriptor]) -> String {
    let mut lines = Vec::new();

    lines.push("# Available directories".to_string());
    lines.push(String::new());
    lines.push(format!(
        "{} directories are available. Select the one matching the caller's intent",
        descriptors.len()
    ));
    lines.push("before searching; every query runs against a single directory.".to_string());

    lines.push(String::new());
    lines.push("## Choosing a directory".to_string());
    for descriptor in descriptors {
        lines.push(format!(
            "- `{}`: {}",
            descriptor.list_name, descriptor.description
        ));
    }

    for descriptor in descriptors {
        lines.push(String::new());
        lines.push(format!("## {}", descriptor.list_name));
        lines.push(format!(
            "{} of type `{}`.",
            entry_count_phrase(descriptor.entry_count),
            descriptor.entry_type
        ));
        if !descriptor.use_cases.is_empty() {
            lines.push(format!("Use for: {}.", descriptor.use_cases.join("; ")));
        }
        lines.push(format!(
            "Searchable fields: {}.",
            descriptor.searchable_fields.join(", ")
        ));
        if let Some(example) = descriptor.example_queries.first() {
            lines.push(format!("Example: {}", example));
        }
    }

    lines.join("\n")
}

fn entry_count_phrase(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}

fn quoted_list(terms: &[String]) -> String {
    terms
        .iter()
        .map(|t| format!("\"{}\"", t))
        .collect::<Vec<_>>()
        .join(", ")
}
