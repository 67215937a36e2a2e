//! Raw source schemas as reported by the data-source collaborator.

use serde::{Deserialize, Serialize};

/// A column in a source schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaColumn {
    pub name: String,

    /// Engine type name (e.g. "INTEGER", "VARCHAR")
    #[serde(rename = "type")]
    pub data_type: String,
}

impl SchemaColumn {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// Schema of one data source.
///
/// Column names are assumed to be unique; the collaborator deduplicates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSchema {
    /// Filled in by the provider from the id the schema was fetched by
    #[serde(default)]
    pub source_id: String,

    pub columns: Vec<SchemaColumn>,

    #[serde(default)]
    pub row_count: u64,
}

impl SourceSchema {
    pub fn new(source_id: impl Into<String>, columns: Vec<SchemaColumn>, row_count: u64) -> Self {
        Self {
            source_id: source_id.into(),
            columns,
            row_count,
        }
    }
}
