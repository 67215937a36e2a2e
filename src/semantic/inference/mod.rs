//! Column role inference.
//!
//! Classifies a column as a dimension, measure, or key from its name, its
//! engine type, and an optional explicit override on the graph node.
//!
//! Precedence (first match wins):
//!
//! 1. Explicit `measure` / `key` overrides are trusted as-is
//! 2. Explicit `ignore` yields `dimension` (the column is filtered out later)
//! 3. `id` / `*_id` names are dimensions, even when numeric
//! 4. Numeric types are measures
//! 5. Everything else is a dimension
//!
//! # Example
//!
//! ```
//! use tessera::model::ColumnRole;
//! use tessera::semantic::inference::infer_role;
//!
//! assert_eq!(infer_role("customer_id", "INTEGER", None), ColumnRole::Dimension);
//! assert_eq!(infer_role("revenue", "DOUBLE", None), ColumnRole::Measure);
//! ```

mod rules;

pub use rules::{
    first_matching_rule, is_identifier_name, is_numeric_type, ColumnFacts, RoleRule,
    NUMERIC_TYPES, ROLE_RULES,
};

use crate::model::{ColumnRole, ExplicitRole};

/// Infer the role of a column.
pub fn infer_role(name: &str, data_type: &str, explicit: Option<ExplicitRole>) -> ColumnRole {
    let facts = ColumnFacts {
        name,
        data_type,
        explicit: explicit.unwrap_or_default(),
    };
    first_matching_rule(&facts).role
}

/// Role for a column that nothing else is known about, by type alone.
pub fn role_for_type(data_type: &str) -> ColumnRole {
    if is_numeric_type(data_type) {
        ColumnRole::Measure
    } else {
        ColumnRole::Dimension
    }
}
