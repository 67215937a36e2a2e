//! # Tessera
//!
//! Semantic graph model and result adapter for visual query exploration.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Backend (workspaces, semantic graph,            │
//! │                   source schemas)                        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [metadata::MetadataProvider]
//! ┌─────────────────────────────────────────────────────────┐
//! │  GraphOrchestrator (generation-guarded async pipeline)   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [semantic builders]
//! ┌─────────────────────────────────────────────────────────┐
//! │        TableModel[] + RelationshipModel[] snapshot       │
//! │        (+ NodeStore for interactive role edits)          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [query builder + executor, external]
//! ┌─────────────────────────────────────────────────────────┐
//! │   QueryResult ──[field_matcher::adapt]──▶ ExplorerResult │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod metadata;
pub mod model;
pub mod orchestrator;
pub mod semantic;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::metadata::{FsMetadataProvider, MetadataProvider, ProviderError};
    pub use crate::model::{
        Aggregation, ColumnModel, ColumnRole, DateGranularity, ExplicitRole, ExplorerColumnInfo,
        ExplorerResult, GraphEdge, GraphNode, JoinKind, QueryResult, QuickCalc,
        RelationshipModel, ResultColumn, SchemaColumn, SelectedField, SemanticGraph,
        SemanticGraphDetail, SourceSchema, TableModel, Workspace,
    };
    pub use crate::orchestrator::{GraphOrchestrator, GraphSnapshot, LoadState, RunOutcome};
    pub use crate::semantic::{
        adapt, build_relationships, build_tables, infer_role, match_field, sanitize, view_names,
        EditorRole, NodeEdit, NodeStore,
    };
}

pub use orchestrator::GraphOrchestrator;
pub use semantic::{adapt, infer_role, sanitize};
