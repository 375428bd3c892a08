//! The directory tool facade.
//!
//! Thin pass-through from agent tool calls to the discovery generator and
//! the query engine. Scoping happens here: a tool call names one directory,
//! which resolves (under the caller's tenant) to at most one list id, and
//! that single-id set is what the engine receives.

use std::sync::Arc;

use tracing::debug;

use directory_discovery::describe_available;
use directory_search::{QueryEngine, SearchQuery};
use directory_storage::Store;
use directory_types::SearchSettings;

use crate::error::ToolError;
use crate::requests::{AgentDirectoryConfig, SearchDirectoryRequest};
use crate::responses::{AvailableDirectories, EntryRecord, SearchDirectoryResponse};

/// The two directory operations exposed to the conversational agent.
pub struct DirectoryTools {
    store: Arc<Store>,
    engine: QueryEngine,
}

impl DirectoryTools {
    pub fn new(store: Arc<Store>, settings: SearchSettings) -> Self {
        let engine = QueryEngine::new(Arc::clone(&store), settings);
        Self { store, engine }
    }

    /// Describe the directories this agent may search.
    pub fn get_available_directories(
        &self,
        tenant_id: &str,
        config: &AgentDirectoryConfig,
    ) -> Result<AvailableDirectories, ToolError> {
        let output = describe_available(&self.store, tenant_id, &config.accessible_lists)?;
        Ok(AvailableDirectories {
            total_count: output.descriptors.len(),
            directories: output.descriptors,
            documentation: output.documentation,
        })
    }

    /// Search one directory by name.
    ///
    /// A (tenant, list_name) pair that resolves to nothing yields an empty
    /// response, not an error: agents may be configured for directories
    /// that are not imported yet.
    pub fn search_directory(
        &self,
        tenant_id: &str,
        list_name: &str,
        request: &SearchDirectoryRequest,
    ) -> Result<SearchDirectoryResponse, ToolError> {
        let Some(list) = self.store.resolve_list(tenant_id, list_name)? else {
            debug!(
                tenant_id = %tenant_id,
                list_name = %list_name,
                "Search against unresolved directory"
            );
            return Ok(SearchDirectoryResponse::empty());
        };

        let mut query = SearchQuery::new()
            .with_tags(request.tags.iter().cloned())
            .with_mode(request.search_mode)
            .with_limit(request.limit);
        query.attribute_filters = request.attribute_filters.clone();
        if let Some(name_query) = &request.query {
            query = query.with_name(name_query);
        }

        let accessible = vec![list.id.clone()];
        let entries = self.engine.search(&accessible, &query)?;

        let records: Vec<EntryRecord> = entries
            .iter()
            .map(|entry| EntryRecord::flatten(entry, &list.entry_type))
            .collect();

        Ok(SearchDirectoryResponse {
            total: records.len(),
            entries: records,
        })
    }
}
