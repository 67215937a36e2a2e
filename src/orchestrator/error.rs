//! Fatal pipeline errors.

use thiserror::Error;

use crate::metadata::ProviderError;

/// Errors that stop a pipeline run in the `Error` state.
///
/// Missing schemas for individual nodes, dangling edges and unmatched result
/// columns are not errors; they are degraded in the semantic layer.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Failed to load workspaces: {0}")]
    WorkspaceLoad(#[source] ProviderError),

    #[error("Failed to load semantic graph for workspace '{workspace_id}': {source}")]
    GraphLoad {
        workspace_id: String,
        #[source]
        source: ProviderError,
    },

    #[error("Failed to load source schemas for workspace '{workspace_id}': {source}")]
    SourceSchemaFetch {
        workspace_id: String,
        #[source]
        source: ProviderError,
    },
}
