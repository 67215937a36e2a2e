//! MetadataProvider trait definition.
//!
//! The MetadataProvider trait abstracts over the backend that owns
//! workspaces, semantic graphs, and data-source schemas. All calls are
//! read-only.

use std::collections::HashMap;

use async_trait::async_trait;

pub use super::error::MetadataResult;
use super::error::ProviderError;
use crate::model::{SemanticGraphDetail, SourceSchema, Workspace};

/// Trait for fetching the inputs of the semantic layer.
///
/// # Example
///
/// ```ignore
/// use tessera::metadata::MetadataProvider;
///
/// async fn example(provider: &impl MetadataProvider) -> MetadataResult<()> {
///     let workspaces = provider.list_workspaces().await?;
///     let graph = provider.get_semantic_graph(&workspaces[0].id).await?;
///     let schema = provider.get_source_schema("src-orders").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// List workspaces, in the backend's order.
    async fn list_workspaces(&self) -> MetadataResult<Vec<Workspace>>;

    /// Get the semantic graph of a workspace.
    ///
    /// Returns `Ok(None)` if the workspace has no semantic graph yet.
    async fn get_semantic_graph(
        &self,
        workspace_id: &str,
    ) -> MetadataResult<Option<SemanticGraphDetail>>;

    /// Get the schema of a data source.
    async fn get_source_schema(&self, source_id: &str) -> MetadataResult<SourceSchema>;

    /// Batch fetch source schemas, keyed by source id.
    ///
    /// Default implementation fetches schemas in parallel using `join_all`
    /// and fails if any single fetch fails.
    async fn get_source_schemas(
        &self,
        source_ids: &[String],
    ) -> MetadataResult<HashMap<String, SourceSchema>> {
        let futures: Vec<_> = source_ids
            .iter()
            .map(|id| async move {
                let mut schema = self.get_source_schema(id).await?;
                schema.source_id = id.clone();
                Ok::<_, ProviderError>((id.clone(), schema))
            })
            .collect();

        let results = futures::future::join_all(futures).await;

        // Collect results, failing if any failed
        results.into_iter().collect()
    }
}
