//! Joining name segments into identifiers.
//!
//! Every formatter takes a required first segment followed by optional
//! segments. Blank optional segments are skipped; a blank first segment is
//! rejected.

use super::AppError;
use super::validation::{is_blank, require_not_blank};

/// Returns the string with its first character upper-cased.
///
/// Empty strings and strings already starting with an upper-case character
/// are returned unchanged.
pub fn uppercase_first_char(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `foo`, `bar`, `baz` -> `fooBarBaz`
pub fn camel_case(segment: &str, other: &[&str]) -> Result<String, AppError> {
    let mut builder = require_not_blank(segment, "The first segment is blank!")?.to_string();
    for it in other.iter().filter(|it| !is_blank(it)) {
        builder.push_str(&uppercase_first_char(it));
    }
    Ok(builder)
}

/// `foo`, `bar`, `baz` -> `foo-bar-baz`
pub fn kebab_case(segment: &str, other: &[&str]) -> Result<String, AppError> {
    join_with(segment, other, "-")
}

/// `foo`, `bar`, `baz` -> `foo:bar:baz`
pub fn colon_case(segment: &str, other: &[&str]) -> Result<String, AppError> {
    join_with(segment, other, ":")
}

/// `foo`, `bar`, `baz` -> `foo/bar/baz`
pub fn slash_case(segment: &str, other: &[&str]) -> Result<String, AppError> {
    join_with(segment, other, "/")
}

/// Returns the value if it is not empty.
pub fn filled(value: &str) -> Result<&str, AppError> {
    if value.is_empty() {
        return Err(AppError::invalid_argument("The value is empty!"));
    }
    Ok(value)
}

fn join_with(segment: &str, other: &[&str], separator: &str) -> Result<String, AppError> {
    let mut builder = require_not_blank(segment, "The first segment is blank!")?.to_string();
    for it in other.iter().filter(|it| !is_blank(it)) {
        builder.push_str(separator);
        builder.push_str(it);
    }
    Ok(builder)
}
