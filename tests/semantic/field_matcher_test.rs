#[cfg(test)]
mod tests {
    use serde_json::json;
    use tessera::model::{
        Aggregation, ColumnRole, DateGranularity, QueryResult, QuickCalc, ResultColumn, Row,
        SelectedField,
    };
    use tessera::semantic::{adapt, match_field};

    fn row(value: serde_json::Value) -> Row {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected an object, got {}", other),
        }
    }

    fn revenue_sum() -> SelectedField {
        SelectedField::new("revenue", "Orders", ColumnRole::Measure)
            .with_aggregation(Aggregation::Sum)
    }

    fn order_date_month() -> SelectedField {
        SelectedField::new("order_date", "Orders", ColumnRole::Dimension)
            .with_date_granularity(DateGranularity::Month)
    }

    #[test]
    fn test_aggregation_prefix_matches() {
        let fields = vec![revenue_sum()];
        let field = match_field("sum_revenue", &fields).unwrap();
        assert_eq!(field.field_name, "revenue");

        assert!(match_field("SUM_revenue", &fields).is_some());
        assert!(match_field("avg_revenue", &fields).is_none());
        assert!(match_field("sum_revenue_total", &fields).is_none());
    }

    #[test]
    fn test_granularity_suffix_matches() {
        let fields = vec![order_date_month()];
        assert!(match_field("order_date_month", &fields).is_some());
        assert!(match_field("order_date_year", &fields).is_none());

        let fields = vec![SelectedField::new("revenue", "Orders", ColumnRole::Measure)
            .with_date_granularity(DateGranularity::Month)];
        assert_eq!(
            match_field("revenue_month", &fields).map(|f| f.field_name.as_str()),
            Some("revenue")
        );
    }

    #[test]
    fn test_exact_name_matches() {
        let fields = vec![SelectedField::new("region", "Customers", ColumnRole::Dimension)];
        assert!(match_field("region", &fields).is_some());
        assert!(match_field("Region", &fields).is_none());
    }

    #[test]
    fn test_quick_calc_prefix_matches() {
        let cases = [
            (QuickCalc::PercentOfTotal, "pct_revenue"),
            (QuickCalc::Running, "running_revenue"),
            (QuickCalc::Diff, "diff_revenue"),
            (QuickCalc::PercentChange, "pct_chg_revenue"),
            (QuickCalc::Rank, "rank_revenue"),
            (QuickCalc::CumulativeAverage, "cum_avg_revenue"),
        ];
        for (qc, column) in cases {
            let fields = vec![
                SelectedField::new("revenue", "Orders", ColumnRole::Measure).with_quick_calc(qc)
            ];
            assert!(match_field(column, &fields).is_some(), "{:?} / {}", qc, column);
        }
    }

    #[test]
    fn test_neutral_settings_do_not_match_tokens() {
        let fields = vec![SelectedField::new("revenue", "Orders", ColumnRole::Measure)
            .with_aggregation(Aggregation::None)
            .with_date_granularity(DateGranularity::Raw)];

        assert!(match_field("none_revenue", &fields).is_none());
        assert!(match_field("revenue_raw", &fields).is_none());
        assert!(match_field("revenue", &fields).is_some());
    }

    #[test]
    fn test_first_field_wins() {
        let fields = vec![
            SelectedField::new("revenue", "Orders", ColumnRole::Measure)
                .with_aggregation(Aggregation::Sum),
            SelectedField::new("revenue", "Returns", ColumnRole::Measure)
                .with_aggregation(Aggregation::Sum),
        ];

        let field = match_field("sum_revenue", &fields).unwrap();
        assert_eq!(field.table_name, "Orders");
    }

    #[test]
    fn test_empty_selection_matches_nothing() {
        assert!(match_field("sum_revenue", &[]).is_none());
    }

    #[test]
    fn test_adapt_attributes_columns() {
        let result = QueryResult {
            columns: vec![
                ResultColumn::new("order_date_month", "VARCHAR"),
                ResultColumn::new("sum_revenue", "DOUBLE"),
                ResultColumn::new("row_num", "BIGINT"),
                ResultColumn::new("label", "VARCHAR"),
            ],
            rows: vec![
                row(json!({"order_date_month": "2024-01", "sum_revenue": 10.5, "row_num": 1, "label": "a"})),
                row(json!({"order_date_month": "2024-02", "sum_revenue": 7.0, "row_num": 2, "label": "b"})),
            ],
            row_count: 2,
            execution_time_ms: 13,
            total_row_count: None,
        };
        let fields = vec![order_date_month(), revenue_sum()];

        let adapted = adapt(result.clone(), &fields);

        assert_eq!(adapted.columns.len(), 4);
        let month = &adapted.columns[0];
        assert_eq!(month.key, "order_date_month");
        assert_eq!(month.name, "order_date");
        assert_eq!(month.table_name, "Orders");
        assert_eq!(month.role, ColumnRole::Dimension);

        let revenue = &adapted.columns[1];
        assert_eq!(revenue.key, "sum_revenue");
        assert_eq!(revenue.name, "revenue");
        assert_eq!(revenue.data_type, "DOUBLE");
        assert_eq!(revenue.role, ColumnRole::Measure);

        let row_num = &adapted.columns[2];
        assert_eq!(row_num.name, "row_num");
        assert_eq!(row_num.table_name, "");
        assert_eq!(row_num.role, ColumnRole::Measure);

        let label = &adapted.columns[3];
        assert_eq!(label.table_name, "");
        assert_eq!(label.role, ColumnRole::Dimension);

        assert_eq!(adapted.rows, result.rows);
        assert_eq!(adapted.row_count, 2);
        assert_eq!(adapted.execution_time_ms, 13);
        assert_eq!(adapted.total_row_count, 2);
    }

    #[test]
    fn test_adapt_with_no_fields_classifies_by_type() {
        let result = QueryResult {
            columns: vec![
                ResultColumn::new("sum_revenue", "DOUBLE"),
                ResultColumn::new("region", "VARCHAR"),
            ],
            row_count: 0,
            total_row_count: Some(500),
            ..Default::default()
        };

        let adapted = adapt(result, &[]);

        assert!(adapted.columns.iter().all(|c| c.table_name.is_empty()));
        assert_eq!(adapted.columns[0].role, ColumnRole::Measure);
        assert_eq!(adapted.columns[1].role, ColumnRole::Dimension);
        assert_eq!(adapted.total_row_count, 500);
    }

    #[test]
    fn test_adapt_deserialized_result() {
        let result: QueryResult = serde_json::from_value(json!({
            "columns": [{"name": "count_order_id", "type": "BIGINT"}],
            "rows": [{"count_order_id": 42}],
            "rowCount": 1,
            "executionTimeMs": 4
        }))
        .unwrap();
        let fields = vec![SelectedField::new("order_id", "Orders", ColumnRole::Key)
            .with_aggregation(Aggregation::Count)];

        let adapted = adapt(result, &fields);
        let value = serde_json::to_value(&adapted).unwrap();

        insta::assert_snapshot!(serde_json::to_string(&value["columns"]).unwrap(), @r#"[{"key":"count_order_id","name":"order_id","role":"key","tableName":"Orders","type":"BIGINT"}]"#);
        assert_eq!(value["totalRowCount"], 1);
    }
}
