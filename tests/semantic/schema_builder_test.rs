#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tessera::model::{ColumnRole, ExplicitRole, GraphNode, SchemaColumn, SourceSchema};
    use tessera::semantic::{build_tables, NodeStore};

    fn schemas(list: Vec<SourceSchema>) -> HashMap<String, SourceSchema> {
        list.into_iter().map(|s| (s.source_id.clone(), s)).collect()
    }

    fn orders_schema() -> SourceSchema {
        SourceSchema::new(
            "src-orders",
            vec![
                SchemaColumn::new("order_id", "INTEGER"),
                SchemaColumn::new("customer_id", "INTEGER"),
                SchemaColumn::new("order_date", "DATE"),
                SchemaColumn::new("revenue", "DOUBLE"),
                SchemaColumn::new("internal_note", "VARCHAR"),
            ],
            1200,
        )
    }

    #[test]
    fn test_node_without_schema_is_omitted() {
        let nodes = vec![
            GraphNode::new("n1", "src-orders", "Orders"),
            GraphNode::new("n2", "src-customers", "Customers"),
            GraphNode::new("n3", "src-products", "Products"),
        ];
        let schemas = schemas(vec![
            orders_schema(),
            SourceSchema::new(
                "src-products",
                vec![SchemaColumn::new("sku", "VARCHAR")],
                10,
            ),
        ]);

        let tables = build_tables(&nodes, &schemas);

        let names: Vec<_> = tables.iter().map(|t| t.view_name.as_str()).collect();
        assert_eq!(names, vec!["Orders", "Products"]);
    }

    #[test]
    fn test_ignored_column_is_dropped() {
        let nodes = vec![GraphNode::new("n1", "src-orders", "Orders")
            .with_column("internal_note", ExplicitRole::Ignore)];

        let tables = build_tables(&nodes, &schemas(vec![orders_schema()]));

        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.columns.len(), 4);
        assert!(table.column("internal_note").is_none());
    }

    #[test]
    fn test_column_order_follows_schema() {
        let nodes = vec![GraphNode::new("n1", "src-orders", "Orders")
            .with_column("revenue", ExplicitRole::Measure)
            .with_column("order_id", ExplicitRole::Key)];

        let tables = build_tables(&nodes, &schemas(vec![orders_schema()]));

        let names: Vec<_> = tables[0].columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["order_id", "customer_id", "order_date", "revenue", "internal_note"]
        );
    }

    #[test]
    fn test_roles_are_inferred() {
        let nodes = vec![GraphNode::new("n1", "src-orders", "Orders")
            .with_column("order_id", ExplicitRole::Key)];

        let tables = build_tables(&nodes, &schemas(vec![orders_schema()]));
        let table = &tables[0];

        assert_eq!(table.column("order_id").unwrap().role, ColumnRole::Key);
        assert_eq!(table.column("customer_id").unwrap().role, ColumnRole::Dimension);
        assert_eq!(table.column("order_date").unwrap().role, ColumnRole::Dimension);
        assert_eq!(table.column("revenue").unwrap().role, ColumnRole::Measure);
        assert_eq!(table.columns_with_role(ColumnRole::Measure).count(), 1);
    }

    #[test]
    fn test_override_for_unknown_column_is_ignored() {
        let nodes = vec![GraphNode::new("n1", "src-orders", "Orders")
            .with_column("not_in_schema", ExplicitRole::Measure)];

        let tables = build_tables(&nodes, &schemas(vec![orders_schema()]));

        assert_eq!(tables[0].columns.len(), 5);
        assert!(tables[0].column("not_in_schema").is_none());
    }

    #[test]
    fn test_first_duplicate_override_applies() {
        let nodes = vec![GraphNode::new("n1", "src-orders", "Orders")
            .with_column("revenue", ExplicitRole::Ignore)
            .with_column("revenue", ExplicitRole::Measure)];
        let schemas = schemas(vec![orders_schema()]);

        let tables = build_tables(&nodes, &schemas);

        assert!(tables[0].column("revenue").is_none());
        assert_eq!(tables, NodeStore::from_graph(&nodes, &schemas).table_models());
    }

    #[test]
    fn test_table_metadata() {
        let nodes = vec![GraphNode::new("n1", "src-orders", "Order Lines (EU)")];

        let tables = build_tables(&nodes, &schemas(vec![orders_schema()]));
        let table = &tables[0];

        assert_eq!(table.view_name, "Order_Lines__EU_");
        assert_eq!(table.display_name, "Order Lines (EU)");
        assert_eq!(table.source_id, "src-orders");
        assert_eq!(table.row_count, 1200);
    }

    #[test]
    fn test_nodes_sharing_a_source_get_separate_tables() {
        let nodes = vec![
            GraphNode::new("n1", "src-orders", "Orders"),
            GraphNode::new("n2", "src-orders", "Orders Copy")
                .with_column("revenue", ExplicitRole::Ignore),
        ];

        let tables = build_tables(&nodes, &schemas(vec![orders_schema()]));

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].columns.len(), 5);
        assert_eq!(tables[1].columns.len(), 4);
    }

    #[test]
    fn test_empty_graph_builds_nothing() {
        assert!(build_tables(&[], &schemas(vec![orders_schema()])).is_empty());
    }
}
