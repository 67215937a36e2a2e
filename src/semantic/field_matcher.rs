//! Result column attribution.
//!
//! Query generation flattens selections into conventionally named output
//! columns (`sum_revenue`, `order_date_month`, `pct_revenue`, ...). This
//! module maps each output column back to the selection that produced it so
//! formatting, grouping and chart axes can follow the original field.
//!
//! Fields are tried in selection order. For each field the rules in
//! [`MATCH_RULES`] are tried in order; the first field with any matching rule
//! wins. Columns that match nothing are classified by type alone and get an
//! empty table name.

use crate::model::{
    ExplorerColumnInfo, ExplorerResult, QueryResult, QuickCalc, ResultColumn, SelectedField,
};

use super::inference::role_for_type;

/// Output column prefix for each quick calc.
pub static QUICK_CALC_PREFIXES: &[(QuickCalc, &str)] = &[
    (QuickCalc::PercentOfTotal, "pct_"),
    (QuickCalc::Running, "running_"),
    (QuickCalc::Diff, "diff_"),
    (QuickCalc::PercentChange, "pct_chg_"),
    (QuickCalc::Rank, "rank_"),
    (QuickCalc::CumulativeAverage, "cum_avg_"),
];

/// Prefix the query generator uses for a quick calc, if it has one.
pub fn quick_calc_prefix(quick_calc: QuickCalc) -> Option<&'static str> {
    QUICK_CALC_PREFIXES
        .iter()
        .find(|(qc, _)| *qc == quick_calc)
        .map(|(_, prefix)| *prefix)
}

/// A naming-convention rule tying a result column name to a field.
#[derive(Clone, Copy)]
pub struct MatchRule {
    /// Rule identifier
    pub name: &'static str,
    matches: fn(&str, &SelectedField) -> bool,
}

impl std::fmt::Debug for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRule").field("name", &self.name).finish()
    }
}

impl MatchRule {
    pub fn matches(&self, column_name: &str, field: &SelectedField) -> bool {
        (self.matches)(column_name, field)
    }
}

/// Plain dimension output: `revenue`.
fn exact_name(column: &str, field: &SelectedField) -> bool {
    column == field.field_name
}

/// Aggregated output: `sum_revenue`, token compared case-insensitively.
fn aggregation_prefix(column: &str, field: &SelectedField) -> bool {
    let Some(aggregation) = field.active_aggregation() else {
        return false;
    };
    strip_prefix_ignore_ascii_case(column, aggregation.token())
        .and_then(|rest| rest.strip_prefix('_'))
        .is_some_and(|rest| rest == field.field_name)
}

/// Date-bucketed output: `order_date_month`.
fn granularity_suffix(column: &str, field: &SelectedField) -> bool {
    let Some(granularity) = field.active_granularity() else {
        return false;
    };
    column
        .strip_suffix(granularity.as_str())
        .and_then(|rest| rest.strip_suffix('_'))
        .is_some_and(|rest| rest == field.field_name)
}

/// Quick calc output: `pct_revenue`, `running_revenue`, ...
fn quick_calc_prefix_rule(column: &str, field: &SelectedField) -> bool {
    let Some(prefix) = field.active_quick_calc().and_then(quick_calc_prefix) else {
        return false;
    };
    column
        .strip_prefix(prefix)
        .is_some_and(|rest| rest == field.field_name)
}

/// Match rules in precedence order.
pub static MATCH_RULES: &[MatchRule] = &[
    MatchRule { name: "exact", matches: exact_name },
    MatchRule { name: "aggregation", matches: aggregation_prefix },
    MatchRule { name: "date_granularity", matches: granularity_suffix },
    MatchRule { name: "quick_calc", matches: quick_calc_prefix_rule },
];

fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

/// A successful attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch<'a> {
    pub field: &'a SelectedField,
    /// Name of the rule that matched
    pub rule: &'static str,
}

/// Find the selected field that produced a result column, with the rule used.
pub fn match_column<'a>(column_name: &str, fields: &'a [SelectedField]) -> Option<FieldMatch<'a>> {
    fields.iter().find_map(|field| {
        MATCH_RULES
            .iter()
            .find(|rule| rule.matches(column_name, field))
            .map(|rule| FieldMatch {
                field,
                rule: rule.name,
            })
    })
}

/// Find the selected field that produced a result column.
pub fn match_field<'a>(column_name: &str, fields: &'a [SelectedField]) -> Option<&'a SelectedField> {
    match_column(column_name, fields).map(|m| m.field)
}

/// Attribute a single result column.
pub fn describe_column(column: &ResultColumn, fields: &[SelectedField]) -> ExplorerColumnInfo {
    match match_column(&column.name, fields) {
        Some(FieldMatch { field, rule }) => {
            log::debug!(
                "Result column '{}' matched field '{}' by {} rule",
                column.name,
                field.field_name,
                rule
            );
            ExplorerColumnInfo {
                key: column.name.clone(),
                name: field.field_name.clone(),
                data_type: column.data_type.clone(),
                table_name: field.table_name.clone(),
                role: field.role,
            }
        }
        None => {
            log::debug!(
                "Result column '{}' matched no selected field; classifying by type '{}'",
                column.name,
                column.data_type
            );
            ExplorerColumnInfo {
                key: column.name.clone(),
                name: column.name.clone(),
                data_type: column.data_type.clone(),
                table_name: String::new(),
                role: role_for_type(&column.data_type),
            }
        }
    }
}

/// Attribute every column of a query result.
///
/// Never fails: each result column yields exactly one output column, in the
/// same order. Rows are carried over untouched.
pub fn adapt(result: QueryResult, fields: &[SelectedField]) -> ExplorerResult {
    let columns = result
        .columns
        .iter()
        .map(|c| describe_column(c, fields))
        .collect();

    ExplorerResult {
        columns,
        total_row_count: result.total_row_count.unwrap_or(result.row_count),
        rows: result.rows,
        row_count: result.row_count,
        execution_time_ms: result.execution_time_ms,
    }
}
