//! Derived join relationships between table models.

use serde::{Deserialize, Serialize};

use super::graph::JoinKind;

/// A join between two tables, referenced by view name.
///
/// When an edge endpoint cannot be resolved, the table name holds the raw
/// node id instead of a view name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipModel {
    pub edge_id: String,
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
    pub join_kind: JoinKind,
}
