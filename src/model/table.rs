//! Derived table model.
//!
//! Tables are recomputed from the graph and the source schemas on every load;
//! they are never mutated in place.

use serde::{Deserialize, Serialize};

/// Semantic role of a column in the table model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// Groups or describes rows
    Dimension,
    /// Numeric, aggregatable
    Measure,
    /// Explicitly marked join/identity key
    Key,
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRole::Dimension => write!(f, "dimension"),
            ColumnRole::Measure => write!(f, "measure"),
            ColumnRole::Key => write!(f, "key"),
        }
    }
}

/// A column of a table model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnModel {
    pub name: String,

    #[serde(rename = "type")]
    pub data_type: String,

    pub role: ColumnRole,
}

/// A queryable table derived from one graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableModel {
    /// Sanitized identifier the backend exposes the source as
    pub view_name: String,

    /// Original source name
    pub display_name: String,

    pub source_id: String,

    /// Columns in source schema order, ignored columns removed
    pub columns: Vec<ColumnModel>,

    pub row_count: u64,
}

impl TableModel {
    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnModel> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns with the given role, in table order.
    pub fn columns_with_role(&self, role: ColumnRole) -> impl Iterator<Item = &ColumnModel> {
        self.columns.iter().filter(move |c| c.role == role)
    }
}
