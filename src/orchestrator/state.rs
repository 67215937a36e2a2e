//! Load states and snapshots exposed by the orchestrator.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::model::{RelationshipModel, SemanticGraphDetail, SourceSchema, TableModel};
use crate::semantic::NodeStore;

/// Why a run finished without data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum EmptyReason {
    /// The backend lists no workspaces
    NoWorkspaces,
    /// The workspace has no semantic graph
    #[serde(rename_all = "camelCase")]
    NoGraph { workspace_id: String },
    /// The semantic graph has no nodes
    #[serde(rename_all = "camelCase")]
    NoNodes { workspace_id: String },
}

/// Consistent result of one completed pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    /// Generation of the run that produced this snapshot
    pub generation: u64,
    pub workspace_id: String,
    pub graph: SemanticGraphDetail,
    pub tables: Vec<TableModel>,
    pub relationships: Vec<RelationshipModel>,
    /// Schemas the tables were built from, keyed by source id
    #[serde(skip)]
    pub schemas: HashMap<String, SourceSchema>,
}

impl GraphSnapshot {
    /// Editable node store over this snapshot's graph.
    pub fn node_store(&self) -> NodeStore {
        NodeStore::from_graph(&self.graph.definitions.nodes, &self.schemas)
    }

    /// Look up a table by view name.
    pub fn table(&self, view_name: &str) -> Option<&TableModel> {
        self.tables.iter().find(|t| t.view_name == view_name)
    }
}

/// State of the load pipeline.
///
/// `Empty`, `Ready` and `Error` are terminal for a run; `reload` starts over
/// from `LoadingWorkspaces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadState {
    #[default]
    Idle,
    LoadingWorkspaces,
    #[serde(rename_all = "camelCase")]
    LoadingGraph { workspace_id: String },
    #[serde(rename_all = "camelCase")]
    BuildingTables { workspace_id: String },
    Empty { reason: EmptyReason },
    Ready { snapshot: Arc<GraphSnapshot> },
    Error { message: String },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            LoadState::LoadingWorkspaces
                | LoadState::LoadingGraph { .. }
                | LoadState::BuildingTables { .. }
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LoadState::Empty { .. } | LoadState::Ready { .. } | LoadState::Error { .. }
        )
    }

    pub fn snapshot(&self) -> Option<&Arc<GraphSnapshot>> {
        match self {
            LoadState::Ready { snapshot } => Some(snapshot),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Outcome of a single pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The run's final state was committed
    Applied(LoadState),
    /// A newer run started first; nothing from this run was committed
    Stale { generation: u64 },
}

impl RunOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self, RunOutcome::Stale { .. })
    }

    pub fn state(&self) -> Option<&LoadState> {
        match self {
            RunOutcome::Applied(state) => Some(state),
            RunOutcome::Stale { .. } => None,
        }
    }
}
