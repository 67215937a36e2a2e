//! Ordered role rules.
//!
//! Each rule pairs a condition with the role it yields. Rules are evaluated
//! top to bottom and the first one whose condition holds decides the role.
//! The last rule always applies.

use crate::model::{ColumnRole, ExplicitRole};

/// Engine type names treated as numeric (compared upper-cased).
pub const NUMERIC_TYPES: &[&str] = &[
    "DOUBLE", "FLOAT", "DECIMAL", "INTEGER", "BIGINT", "SMALLINT", "TINYINT", "HUGEINT",
];

/// Returns true if the type name is one of [`NUMERIC_TYPES`], ignoring case.
pub fn is_numeric_type(data_type: &str) -> bool {
    let upper = data_type.to_uppercase();
    NUMERIC_TYPES.contains(&upper.as_str())
}

/// Returns true for identifier-looking names (`id`, `*_id`), ignoring case.
pub fn is_identifier_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower == "id" || lower.ends_with("_id")
}

/// Facts about a column that the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct ColumnFacts<'a> {
    pub name: &'a str,
    pub data_type: &'a str,
    pub explicit: ExplicitRole,
}

/// A single role rule.
#[derive(Clone, Copy)]
pub struct RoleRule {
    /// Rule identifier
    pub name: &'static str,
    /// Role produced when the rule applies
    pub role: ColumnRole,
    applies: fn(&ColumnFacts<'_>) -> bool,
}

impl std::fmt::Debug for RoleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleRule")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish()
    }
}

impl RoleRule {
    pub fn applies(&self, facts: &ColumnFacts<'_>) -> bool {
        (self.applies)(facts)
    }
}

fn explicit_measure(c: &ColumnFacts<'_>) -> bool {
    c.explicit == ExplicitRole::Measure
}

fn explicit_key(c: &ColumnFacts<'_>) -> bool {
    c.explicit == ExplicitRole::Key
}

// Ignored columns are filtered out later; the role only matters if they are not.
fn explicit_ignore(c: &ColumnFacts<'_>) -> bool {
    c.explicit == ExplicitRole::Ignore
}

fn identifier_name(c: &ColumnFacts<'_>) -> bool {
    is_identifier_name(c.name)
}

fn numeric_type(c: &ColumnFacts<'_>) -> bool {
    is_numeric_type(c.data_type)
}

fn always(_: &ColumnFacts<'_>) -> bool {
    true
}

/// Role rules in precedence order.
pub static ROLE_RULES: &[RoleRule] = &[
    RoleRule { name: "explicit_measure", role: ColumnRole::Measure, applies: explicit_measure },
    RoleRule { name: "explicit_key", role: ColumnRole::Key, applies: explicit_key },
    RoleRule { name: "explicit_ignore", role: ColumnRole::Dimension, applies: explicit_ignore },
    RoleRule { name: "identifier_name", role: ColumnRole::Dimension, applies: identifier_name },
    RoleRule { name: "numeric_type", role: ColumnRole::Measure, applies: numeric_type },
    RoleRule { name: "fallback", role: ColumnRole::Dimension, applies: always },
];

/// Find the first rule that applies to the column.
pub fn first_matching_rule(facts: &ColumnFacts<'_>) -> &'static RoleRule {
    ROLE_RULES
        .iter()
        .find(|rule| rule.applies(facts))
        .unwrap_or(&ROLE_RULES[ROLE_RULES.len() - 1])
}
