#[cfg(test)]
mod tests {
    use tessera::model::{ColumnRole, ExplicitRole};
    use tessera::semantic::inference::{infer_role, role_for_type, NUMERIC_TYPES};

    #[test]
    fn test_id_suffix_outranks_numeric_type() {
        assert_eq!(infer_role("customer_id", "INTEGER", None), ColumnRole::Dimension);
        assert_eq!(infer_role("id", "BIGINT", None), ColumnRole::Dimension);
        assert_eq!(infer_role("Order_ID", "HUGEINT", None), ColumnRole::Dimension);
    }

    #[test]
    fn test_numeric_column_is_measure() {
        assert_eq!(infer_role("revenue", "DOUBLE", None), ColumnRole::Measure);
        assert_eq!(infer_role("quantity", "integer", None), ColumnRole::Measure);
    }

    #[test]
    fn test_every_numeric_type_is_measure() {
        for ty in NUMERIC_TYPES {
            assert_eq!(infer_role("amount", ty, None), ColumnRole::Measure, "{}", ty);
        }
    }

    #[test]
    fn test_non_numeric_column_is_dimension() {
        assert_eq!(infer_role("region", "VARCHAR", None), ColumnRole::Dimension);
        assert_eq!(infer_role("order_date", "DATE", None), ColumnRole::Dimension);
        assert_eq!(infer_role("active", "BOOLEAN", None), ColumnRole::Dimension);
    }

    #[test]
    fn test_explicit_key_is_trusted() {
        assert_eq!(
            infer_role("region_code", "VARCHAR", Some(ExplicitRole::Key)),
            ColumnRole::Key
        );
        assert_eq!(
            infer_role("amount", "DOUBLE", Some(ExplicitRole::Key)),
            ColumnRole::Key
        );
    }

    #[test]
    fn test_explicit_measure_beats_id_suffix() {
        assert_eq!(
            infer_role("store_id", "INTEGER", Some(ExplicitRole::Measure)),
            ColumnRole::Measure
        );
        assert_eq!(
            infer_role("label", "VARCHAR", Some(ExplicitRole::Measure)),
            ColumnRole::Measure
        );
    }

    #[test]
    fn test_explicit_ignore_yields_dimension() {
        assert_eq!(
            infer_role("revenue", "DOUBLE", Some(ExplicitRole::Ignore)),
            ColumnRole::Dimension
        );
    }

    #[test]
    fn test_unset_behaves_like_none() {
        assert_eq!(
            infer_role("revenue", "DOUBLE", Some(ExplicitRole::Unset)),
            infer_role("revenue", "DOUBLE", None)
        );
    }

    #[test]
    fn test_role_for_type() {
        assert_eq!(role_for_type("FLOAT"), ColumnRole::Measure);
        assert_eq!(role_for_type("TIMESTAMP"), ColumnRole::Dimension);
    }
}
