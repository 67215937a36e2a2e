//! Table model construction.
//!
//! Combines graph nodes with their source schemas. Output order follows the
//! node order; column order follows the schema.

use std::collections::{HashMap, HashSet};

use crate::model::{ColumnModel, GraphNode, SourceSchema, TableModel};

use super::inference::infer_role;
use super::sanitize::sanitize;

/// Build table models for every node whose source schema is available.
///
/// A node whose `source_id` has no entry in `schemas` produces no table at
/// all. Columns overridden as `ignore` are left out. When a node lists the
/// same column more than once, the first entry applies.
pub fn build_tables(
    nodes: &[GraphNode],
    schemas: &HashMap<String, SourceSchema>,
) -> Vec<TableModel> {
    let mut seen_views = HashSet::new();

    nodes
        .iter()
        .filter_map(|node| {
            let Some(schema) = schemas.get(&node.source_id) else {
                log::warn!(
                    "Dropping node '{}': no schema loaded for source '{}'",
                    node.id,
                    node.source_id
                );
                return None;
            };

            let table = build_table(node, schema);
            if !seen_views.insert(table.view_name.clone()) {
                log::warn!(
                    "View name '{}' is used by more than one node (node '{}')",
                    table.view_name,
                    node.id
                );
            }
            Some(table)
        })
        .collect()
}

/// Build the table model for a single node against its schema.
pub fn build_table(node: &GraphNode, schema: &SourceSchema) -> TableModel {
    let columns = schema
        .columns
        .iter()
        .filter_map(|col| {
            let explicit = node.column_role(&col.name);
            if explicit.is_some_and(|r| r.is_ignored()) {
                return None;
            }
            Some(ColumnModel {
                name: col.name.clone(),
                data_type: col.data_type.clone(),
                role: infer_role(&col.name, &col.data_type, explicit),
            })
        })
        .collect();

    TableModel {
        view_name: sanitize(&node.source_name),
        display_name: node.source_name.clone(),
        source_id: node.source_id.clone(),
        columns,
        row_count: schema.row_count,
    }
}
