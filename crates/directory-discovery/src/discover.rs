//! Resolution of accessible directories into descriptors and documentation.

use tracing::{debug, warn};

use directory_schema::SchemaRegistry;
use directory_storage::Store;

use crate::descriptor::{DirectoryDescriptor, DiscoveryOutput};
use crate::docs;
use crate::error::DiscoveryError;

/// Describe the directories an agent may search.
///
/// Each accessible name is resolved against the tenant's lists; names that
/// resolve to nothing are skipped with a warning, since agent configuration
/// may reference directories that are not imported yet. A resolved list
/// whose entry type has no schema is a deployment defect and fails the whole
/// call. Entry counts are live. Descriptors keep the accessible-name order.
pub fn describe_available(
    store: &Store,
    tenant_id: &str,
    accessible_list_names: &[String],
) -> Result<DiscoveryOutput, DiscoveryError> {
    let mut descriptors = Vec::new();
    let mut schemas = Vec::new();

    for list_name in accessible_list_names {
        let Some(list) = store.resolve_list(tenant_id, list_name)? else {
            warn!(
                tenant_id = %tenant_id,
                list_name = %list_name,
                "Accessible directory does not resolve, skipping"
            );
            continue;
        };
        let schema = SchemaRegistry::get(&list.entry_type)?;
        let entry_count = store.count_entries(&list.id)?;
        descriptors.push(DirectoryDescriptor::assemble(&list, schema, entry_count));
        schemas.push(schema);
    }

    let documentation = match descriptors.as_slice() {
        [] => docs::no_directories_stub(),
        [only] => docs::single_directory(only, schemas[0]),
        many => docs::multi_directory(many),
    };

    debug!(
        tenant_id = %tenant_id,
        requested = accessible_list_names.len(),
        resolved = descriptors.len(),
        "Described available directories"
    );

    Ok(DiscoveryOutput {
        descriptors,
        documentation,
    })
}
