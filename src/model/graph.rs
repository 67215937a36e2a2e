//! Persisted semantic graph types.
//!
//! A semantic graph is a set of table-nodes (each pointing at one data source)
//! and join-edges between their columns. The graph is owned by the backend;
//! this crate only reads it.

use serde::{Deserialize, Serialize};

/// Role override stored on a graph node column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplicitRole {
    /// Always treat the column as a measure
    Measure,
    /// Trusted join/identity key
    Key,
    /// Hide the column from the table model
    Ignore,
    /// No override, role is inferred
    #[default]
    Unset,
}

impl ExplicitRole {
    /// Returns true if the column should be left out of the table model.
    pub fn is_ignored(self) -> bool {
        matches!(self, ExplicitRole::Ignore)
    }
}

/// Join kind drawn on an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinKind {
    #[default]
    Left,
    Inner,
    Right,
    Full,
}

impl std::fmt::Display for JoinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKind::Left => write!(f, "LEFT"),
            JoinKind::Inner => write!(f, "INNER"),
            JoinKind::Right => write!(f, "RIGHT"),
            JoinKind::Full => write!(f, "FULL"),
        }
    }
}

/// A column entry on a graph node, carrying an optional role override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeColumn {
    pub name: String,

    #[serde(default)]
    pub role: ExplicitRole,
}

impl NodeColumn {
    pub fn new(name: impl Into<String>, role: ExplicitRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// A reference to one data source within a semantic graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Node id, unique within the graph
    #[serde(alias = "nodeId")]
    pub id: String,

    /// Id of the data source this node points at
    pub source_id: String,

    /// Display name of the data source (sanitized into the view name)
    pub source_name: String,

    /// Per-column role overrides. Columns without an entry are inferred.
    #[serde(default)]
    pub columns: Vec<NodeColumn>,
}

impl GraphNode {
    /// Create a node with no column overrides.
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            source_name: source_name.into(),
            columns: Vec::new(),
        }
    }

    /// Builder-style helper to add a column override.
    pub fn with_column(mut self, name: impl Into<String>, role: ExplicitRole) -> Self {
        self.columns.push(NodeColumn::new(name, role));
        self
    }

    /// Look up the override for a column by exact name.
    pub fn column_role(&self, name: &str) -> Option<ExplicitRole> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.role)
    }
}

/// A join between two nodes' columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,

    #[serde(alias = "source")]
    pub source_node_id: String,

    pub source_column: String,

    #[serde(alias = "target")]
    pub target_node_id: String,

    pub target_column: String,

    #[serde(default, alias = "joinType")]
    pub join_kind: JoinKind,
}

impl GraphEdge {
    pub fn new(
        id: impl Into<String>,
        source: (&str, &str),
        target: (&str, &str),
        join_kind: JoinKind,
    ) -> Self {
        Self {
            id: id.into(),
            source_node_id: source.0.to_string(),
            source_column: source.1.to_string(),
            target_node_id: target.0.to_string(),
            target_column: target.1.to_string(),
            join_kind,
        }
    }
}

/// Nodes and edges of a semantic graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticGraph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,

    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl SemanticGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Distinct source ids referenced by the nodes, in first-seen order.
    pub fn source_ids(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.nodes
            .iter()
            .filter(|n| seen.insert(n.source_id.as_str()))
            .map(|n| n.source_id.clone())
            .collect()
    }
}

/// Semantic graph detail as returned by the backend for a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticGraphDetail {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub workspace_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    pub definitions: SemanticGraph,
}

impl SemanticGraphDetail {
    pub fn new(definitions: SemanticGraph) -> Self {
        Self {
            definitions,
            ..Default::default()
        }
    }
}
