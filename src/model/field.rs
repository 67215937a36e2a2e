//! Field selections produced by the query builder.

use serde::{Deserialize, Serialize};

use super::table::ColumnRole;

/// Aggregation applied to a selected field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    Avg,
    Min,
    Max,
    Count,
    #[default]
    None,
}

impl Aggregation {
    /// Token the query generator prefixes aggregated output columns with.
    pub fn token(self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Avg => "avg",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
            Aggregation::Count => "count",
            Aggregation::None => "none",
        }
    }
}

/// Date bucketing applied to a selected field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateGranularity {
    #[default]
    Raw,
    Day,
    Month,
    Quarter,
    Year,
}

impl DateGranularity {
    pub fn as_str(self) -> &'static str {
        match self {
            DateGranularity::Raw => "raw",
            DateGranularity::Day => "day",
            DateGranularity::Month => "month",
            DateGranularity::Quarter => "quarter",
            DateGranularity::Year => "year",
        }
    }
}

/// Derived computation layered on a selected field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuickCalc {
    #[default]
    None,
    PercentOfTotal,
    Running,
    Diff,
    PercentChange,
    Rank,
    CumulativeAverage,
}

/// A field the user selected in the query builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedField {
    pub field_name: String,

    /// View name of the table the field belongs to
    pub table_name: String,

    pub role: ColumnRole,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Aggregation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_granularity: Option<DateGranularity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_calc: Option<QuickCalc>,
}

impl SelectedField {
    pub fn new(
        field_name: impl Into<String>,
        table_name: impl Into<String>,
        role: ColumnRole,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            table_name: table_name.into(),
            role,
            aggregation: None,
            date_granularity: None,
            quick_calc: None,
        }
    }

    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = Some(aggregation);
        self
    }

    pub fn with_date_granularity(mut self, granularity: DateGranularity) -> Self {
        self.date_granularity = Some(granularity);
        self
    }

    pub fn with_quick_calc(mut self, quick_calc: QuickCalc) -> Self {
        self.quick_calc = Some(quick_calc);
        self
    }

    /// The aggregation, if one is set and it is not `none`.
    pub fn active_aggregation(&self) -> Option<Aggregation> {
        self.aggregation.filter(|a| *a != Aggregation::None)
    }

    /// The date granularity, if one is set and it is not `raw`.
    pub fn active_granularity(&self) -> Option<DateGranularity> {
        self.date_granularity.filter(|g| *g != DateGranularity::Raw)
    }

    /// The quick calc, if one is set and it is not `none`.
    pub fn active_quick_calc(&self) -> Option<QuickCalc> {
        self.quick_calc.filter(|q| *q != QuickCalc::None)
    }
}
