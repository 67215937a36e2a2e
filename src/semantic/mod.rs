//! Semantic layer - table/relationship models and result attribution.
//!
//! Everything here is synchronous and side-effect free apart from logging:
//!
//! 1. **Sanitize** - map source names to view names the backend exposes
//! 2. **Infer** - classify columns as dimensions, measures, or keys
//! 3. **Build** - derive table and relationship models from a semantic graph
//! 4. **Attribute** - map flat query result columns back to selected fields
//! 5. **Edit** - cycle column roles on a node snapshot
//!
//! Non-fatal problems (missing schemas, dangling edge endpoints, unmatched
//! result columns) degrade the output instead of failing.

pub mod editor;
pub mod field_matcher;
pub mod inference;
pub mod relationship_builder;
pub mod sanitize;
pub mod schema_builder;

pub use editor::{EditError, EditableColumn, EditableNode, EditorRole, NodeEdit, NodeStore};
pub use field_matcher::{adapt, describe_column, match_column, match_field, FieldMatch};
pub use inference::{infer_role, is_numeric_type, role_for_type};
pub use relationship_builder::{build_relationships, view_names};
pub use sanitize::{sanitize, MAX_VIEW_NAME_LEN};
pub use schema_builder::{build_table, build_tables};
