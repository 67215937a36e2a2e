//! View name sanitization.
//!
//! The backend runs the same mapping when it registers a data source as a
//! queryable view, so the output here must match it character for character:
//! every character outside `[A-Za-z0-9_]` becomes `_`, then the result is cut
//! to [`MAX_VIEW_NAME_LEN`] characters.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of a view name.
pub const MAX_VIEW_NAME_LEN: usize = 128;

/// Any single character that is not allowed in a view name.
static UNSAFE_CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// Map a display name to a safe view identifier.
///
/// Total and idempotent. Each non-allowed Unicode scalar value becomes exactly
/// one `_`, so the output is pure ASCII and truncation never splits a character.
pub fn sanitize(name: &str) -> String {
    let mut out = UNSAFE_CHAR.replace_all(name, "_").into_owned();
    out.truncate(MAX_VIEW_NAME_LEN);
    out
}
