//! Data model shared by the semantic layer and its collaborators.
//!
//! Inputs (`SourceSchema`, `GraphNode`, `GraphEdge`, `SelectedField`,
//! `QueryResult`) mirror the JSON shapes the backend and the query builder
//! exchange. Outputs (`TableModel`, `RelationshipModel`, `ExplorerResult`)
//! are freshly derived values that are never persisted by this crate.

pub mod field;
pub mod graph;
pub mod relationship;
pub mod result;
pub mod schema;
pub mod table;

pub use field::{Aggregation, DateGranularity, QuickCalc, SelectedField};
pub use graph::{
    ExplicitRole, GraphEdge, GraphNode, JoinKind, NodeColumn, SemanticGraph, SemanticGraphDetail,
};
pub use relationship::RelationshipModel;
pub use result::{ExplorerColumnInfo, ExplorerResult, QueryResult, ResultColumn, Row};
pub use schema::{SchemaColumn, SourceSchema};
pub use table::{ColumnModel, ColumnRole, TableModel};

use serde::{Deserialize, Serialize};

/// A workspace as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
}

impl Workspace {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
