//! Relationship model construction.

use std::collections::HashMap;

use crate::model::{GraphEdge, GraphNode, RelationshipModel};

use super::sanitize::sanitize;

/// Map every node id to its view name.
pub fn view_names(nodes: &[GraphNode]) -> HashMap<String, String> {
    nodes
        .iter()
        .map(|n| (n.id.clone(), sanitize(&n.source_name)))
        .collect()
}

/// Build relationships for the edges, in edge order.
///
/// An endpoint missing from `view_names` keeps its raw node id as the table
/// name; the edge is still emitted.
pub fn build_relationships(
    edges: &[GraphEdge],
    view_names: &HashMap<String, String>,
) -> Vec<RelationshipModel> {
    edges
        .iter()
        .map(|edge| RelationshipModel {
            edge_id: edge.id.clone(),
            source_table: resolve(view_names, &edge.source_node_id, &edge.id),
            source_column: edge.source_column.clone(),
            target_table: resolve(view_names, &edge.target_node_id, &edge.id),
            target_column: edge.target_column.clone(),
            join_kind: edge.join_kind,
        })
        .collect()
}

fn resolve(view_names: &HashMap<String, String>, node_id: &str, edge_id: &str) -> String {
    match view_names.get(node_id) {
        Some(view) => view.clone(),
        None => {
            log::warn!(
                "Edge '{}' references unknown node '{}'; using the node id as table name",
                edge_id,
                node_id
            );
            node_id.to_string()
        }
    }
}
