//! Query execution results and their adapted, attributable form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::table::ColumnRole;

/// One row of a query result, keyed by result column name.
pub type Row = Map<String, Value>;

/// A flat output column as returned by query execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultColumn {
    pub name: String,

    #[serde(rename = "type")]
    pub data_type: String,
}

impl ResultColumn {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// Raw query execution result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub columns: Vec<ResultColumn>,

    #[serde(default)]
    pub rows: Vec<Row>,

    #[serde(default)]
    pub row_count: u64,

    #[serde(default)]
    pub execution_time_ms: u64,

    /// Row count before the executor applied a limit, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_row_count: Option<u64>,
}

/// A result column attributed back to a field selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerColumnInfo {
    /// Key into each row map (the result column name)
    pub key: String,

    /// Field name of the matched selection, or the column name if unmatched
    pub name: String,

    #[serde(rename = "type")]
    pub data_type: String,

    /// Owning table view name; empty when unmatched
    pub table_name: String,

    pub role: ColumnRole,
}

/// Query result with every column attributed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerResult {
    pub columns: Vec<ExplorerColumnInfo>,
    pub rows: Vec<Row>,
    pub row_count: u64,
    pub execution_time_ms: u64,
    pub total_row_count: u64,
}
