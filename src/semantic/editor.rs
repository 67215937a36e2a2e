//! Interactive role editing on rendered table nodes.
//!
//! A [`NodeStore`] is an immutable snapshot of the nodes being edited, keyed
//! by node id. Edits go through [`NodeStore::apply`], which returns a new
//! snapshot and leaves the original untouched. Nodes that an edit does not
//! touch are shared between the two snapshots.
//!
//! Overrides live only on the edited node instance. Another node pointing at
//! the same source keeps its own roles; saving the overrides back to the
//! semantic graph is up to the caller.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{ColumnModel, ColumnRole, ExplicitRole, GraphNode, SourceSchema, TableModel};

use super::inference::infer_role;
use super::sanitize::sanitize;

/// Role shown on a node column, including the hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorRole {
    Dimension,
    Measure,
    Key,
    Ignore,
}

impl EditorRole {
    /// Next role when the role indicator is clicked.
    ///
    /// `dimension → measure → ignore → dimension`; a key moves to `measure`.
    pub fn next(self) -> Self {
        match self {
            EditorRole::Dimension | EditorRole::Key => EditorRole::Measure,
            EditorRole::Measure => EditorRole::Ignore,
            EditorRole::Ignore => EditorRole::Dimension,
        }
    }

    /// The table-model role, or `None` for an ignored column.
    pub fn column_role(self) -> Option<ColumnRole> {
        match self {
            EditorRole::Dimension => Some(ColumnRole::Dimension),
            EditorRole::Measure => Some(ColumnRole::Measure),
            EditorRole::Key => Some(ColumnRole::Key),
            EditorRole::Ignore => None,
        }
    }
}

impl From<ColumnRole> for EditorRole {
    fn from(role: ColumnRole) -> Self {
        match role {
            ColumnRole::Dimension => EditorRole::Dimension,
            ColumnRole::Measure => EditorRole::Measure,
            ColumnRole::Key => EditorRole::Key,
        }
    }
}

/// A column on an editable node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub role: EditorRole,
}

/// A graph node as rendered for editing: every schema column, ignored ones included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableNode {
    pub id: String,
    pub source_id: String,
    pub source_name: String,
    pub view_name: String,
    pub row_count: u64,
    pub columns: Vec<EditableColumn>,
}

impl EditableNode {
    /// Lay out a node against its schema, with roles as the table builder would compute them.
    pub fn from_node(node: &GraphNode, schema: &SourceSchema) -> Self {
        let columns = schema
            .columns
            .iter()
            .map(|col| {
                let explicit = node.column_role(&col.name);
                let role = if explicit.is_some_and(ExplicitRole::is_ignored) {
                    EditorRole::Ignore
                } else {
                    infer_role(&col.name, &col.data_type, explicit).into()
                };
                EditableColumn {
                    name: col.name.clone(),
                    data_type: col.data_type.clone(),
                    role,
                }
            })
            .collect();

        Self {
            id: node.id.clone(),
            source_id: node.source_id.clone(),
            source_name: node.source_name.clone(),
            view_name: sanitize(&node.source_name),
            row_count: schema.row_count,
            columns,
        }
    }

    pub fn column(&self, name: &str) -> Option<&EditableColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Table model with the local overrides applied.
    pub fn to_table_model(&self) -> TableModel {
        TableModel {
            view_name: self.view_name.clone(),
            display_name: self.source_name.clone(),
            source_id: self.source_id.clone(),
            columns: self
                .columns
                .iter()
                .filter_map(|c| {
                    c.role.column_role().map(|role| ColumnModel {
                        name: c.name.clone(),
                        data_type: c.data_type.clone(),
                        role,
                    })
                })
                .collect(),
            row_count: self.row_count,
        }
    }

    fn with_role(&self, column: &str, role: impl FnOnce(EditorRole) -> EditorRole) -> Option<Self> {
        let idx = self.columns.iter().position(|c| c.name == column)?;
        let mut node = self.clone();
        node.columns[idx].role = role(node.columns[idx].role);
        Some(node)
    }
}

/// An edit on a node column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeEdit {
    /// Advance the column to its next role
    CycleRole { node_id: String, column: String },
    /// Set the column role directly
    SetRole {
        node_id: String,
        column: String,
        role: EditorRole,
    },
}

impl NodeEdit {
    pub fn cycle(node_id: impl Into<String>, column: impl Into<String>) -> Self {
        NodeEdit::CycleRole {
            node_id: node_id.into(),
            column: column.into(),
        }
    }

    pub fn set(node_id: impl Into<String>, column: impl Into<String>, role: EditorRole) -> Self {
        NodeEdit::SetRole {
            node_id: node_id.into(),
            column: column.into(),
            role,
        }
    }
}

/// Error applying an edit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Unknown node: '{0}'")]
    UnknownNode(String),

    #[error("Unknown column '{column}' on node '{node_id}'")]
    UnknownColumn { node_id: String, column: String },
}

/// Immutable snapshot of editable nodes, keyed by node id.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    order: Arc<Vec<String>>,
    nodes: Arc<HashMap<String, Arc<EditableNode>>>,
}

impl NodeStore {
    /// Build a store for every node whose schema is available, in node order.
    pub fn from_graph(nodes: &[GraphNode], schemas: &HashMap<String, SourceSchema>) -> Self {
        let mut order = Vec::with_capacity(nodes.len());
        let mut map = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let Some(schema) = schemas.get(&node.source_id) else {
                continue;
            };
            if map
                .insert(node.id.clone(), Arc::new(EditableNode::from_node(node, schema)))
                .is_none()
            {
                order.push(node.id.clone());
            }
        }

        Self {
            order: Arc::new(order),
            nodes: Arc::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, node_id: &str) -> Option<&EditableNode> {
        self.nodes.get(node_id).map(|n| n.as_ref())
    }

    /// Shared handle to a node, for identity checks across snapshots.
    pub fn get_shared(&self, node_id: &str) -> Option<Arc<EditableNode>> {
        self.nodes.get(node_id).cloned()
    }

    /// Nodes in their original order.
    pub fn nodes(&self) -> impl Iterator<Item = &EditableNode> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|n| n.as_ref()))
    }

    /// Table models for all nodes with local overrides applied.
    pub fn table_models(&self) -> Vec<TableModel> {
        self.nodes().map(EditableNode::to_table_model).collect()
    }

    /// Apply an edit and return the resulting snapshot.
    pub fn apply(&self, edit: &NodeEdit) -> Result<NodeStore, EditError> {
        let (node_id, column) = match edit {
            NodeEdit::CycleRole { node_id, column } | NodeEdit::SetRole { node_id, column, .. } => {
                (node_id, column)
            }
        };

        let current = self
            .nodes
            .get(node_id)
            .ok_or_else(|| EditError::UnknownNode(node_id.clone()))?;

        let updated = match edit {
            NodeEdit::CycleRole { .. } => current.with_role(column, EditorRole::next),
            NodeEdit::SetRole { role, .. } => current.with_role(column, |_| *role),
        }
        .ok_or_else(|| EditError::UnknownColumn {
            node_id: node_id.clone(),
            column: column.clone(),
        })?;

        let mut nodes = (*self.nodes).clone();
        nodes.insert(node_id.clone(), Arc::new(updated));

        Ok(NodeStore {
            order: Arc::clone(&self.order),
            nodes: Arc::new(nodes),
        })
    }
}
