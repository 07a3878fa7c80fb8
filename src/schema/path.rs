//! Field path parsing and value resolution.
//!
//! Paths address a field inside a nested document, e.g. `address.zip`,
//! `items.0.name` or `items[0].name`. Segments are separated by `.`, `[`,
//! `]` and quote characters; a segment made only of digits is an index.

use crate::error::{SchemaError, SchemaResult};
use serde_json::Value;
use std::fmt;

/// One segment of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathToken {
    /// A field name
    Key(String),
    /// A position in an array
    Index(usize),
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '.' | '[' | ']' | '\'' | '"')
}

/// Split a path into tokens, dropping empty segments.
pub fn parse_path(path: &str) -> Vec<PathToken> {
    path.split(is_separator)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.parse::<usize>() {
            Ok(index) => PathToken::Index(index),
            Err(_) => PathToken::Key(segment.to_string()),
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resolve the value at `tokens` inside `root`.
///
/// Absent or `null` intermediate values resolve to `None`, as do missing
/// keys and out-of-range indices. Entering a scalar, or using a key on an
/// array, is a [`SchemaError::PathMismatch`]. `path` is only used for error
/// reporting.
pub fn resolve_value<'v>(
    root: &'v Value,
    tokens: &[PathToken],
    path: &str,
) -> SchemaResult<Option<&'v Value>> {
    let mut current = Some(root);

    for token in tokens {
        let Some(value) = current.filter(|value| !value.is_null()) else {
            return Ok(None);
        };

        current = match (value, token) {
            (Value::Object(map), PathToken::Key(key)) => map.get(key),
            (Value::Object(map), PathToken::Index(index)) => map.get(&index.to_string()),
            (Value::Array(items), PathToken::Index(index)) => items.get(*index),
            (other, token) => {
                return Err(SchemaError::PathMismatch {
                    path: path.to_string(),
                    segment: token.to_string(),
                    found: kind_of(other),
                });
            }
        };
    }

    Ok(current)
}

/// Resolve both the value at `tokens` and the value at its parent.
///
/// The parent of a single-segment path is `root` itself.
pub fn resolve_with_parent<'v>(
    root: &'v Value,
    tokens: &[PathToken],
    path: &str,
) -> SchemaResult<(Option<&'v Value>, Option<&'v Value>)> {
    let parent_tokens = &tokens[..tokens.len().saturating_sub(1)];
    let parent = resolve_value(root, parent_tokens, path)?;
    let value = resolve_value(root, tokens, path)?;
    Ok((value, parent))
}
