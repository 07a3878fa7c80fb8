//! Error and result types for schema construction and validation.
//!
//! Validation has two distinct outcome channels:
//!
//! - [`SchemaError`] reports that the schema itself, or the way it is being
//!   used, is wrong (an invalid regex, `no_unknown` on an empty shape, a path
//!   that does not resolve). These are programming errors surfaced through
//!   `Result`.
//! - [`ErrorResult`] reports whether an input conforms. `None` means valid;
//!   `Some(Violation)` describes what failed. Rejected input is never an `Err`.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Outcome of validating a value: `None` when the value conforms.
pub type ErrorResult = Option<Violation>;

/// Result type for schema construction and schema-usage operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema-usage violations.
///
/// These errors indicate that the schema is malformed or that a call site
/// asked for something the schema cannot answer. They are never produced
/// because an input value failed a constraint.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A constraint argument cannot be used to build a rule
    #[error("Invalid argument for rule '{rule}': {reason}")]
    InvalidConstraint { rule: &'static str, reason: String },

    /// A regular expression failed to compile
    #[error("Invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// `no_unknown` was registered on an object without declared fields
    #[error("no_unknown must be used with a schema that declares at least one field")]
    NoUnknownWithoutShape,

    /// The path string contains no segments
    #[error("Invalid path '{path}': no segments")]
    InvalidPath { path: String },

    /// A path segment does not correspond to any declared schema node
    #[error("Path '{path}' does not resolve to a schema node at segment '{segment}'")]
    UnresolvedPath { path: String, segment: String },

    /// Value traversal hit a value that cannot be entered with the segment
    #[error("Path '{path}' cannot traverse {found} value at segment '{segment}'")]
    PathMismatch {
        path: String,
        segment: String,
        found: &'static str,
    },
}

impl SchemaError {
    /// Create an invalid constraint error
    pub fn invalid_constraint(rule: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            rule,
            reason: reason.into(),
        }
    }

    /// Create an unresolved path error
    pub fn unresolved_path(path: impl Into<String>, segment: impl ToString) -> Self {
        Self::UnresolvedPath {
            path: path.into(),
            segment: segment.to_string(),
        }
    }
}

/// A description of why a value failed validation.
///
/// Leaf validators produce a [`Violation::Message`]; object validators
/// produce a [`Violation::Shape`] keyed by the failing field names. Messages
/// are carried unchanged from the rule that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Violation {
    /// A single violated constraint
    Message(String),
    /// Per-field failures of an object shape
    Shape(ShapeErrors),
}

impl Violation {
    /// Create a message violation
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// Get the message if this is a leaf failure.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(text) => Some(text),
            Self::Shape(_) => None,
        }
    }

    /// Get the field errors if this is an object failure.
    pub fn as_shape(&self) -> Option<&ShapeErrors> {
        match self {
            Self::Message(_) => None,
            Self::Shape(errors) => Some(errors),
        }
    }

    /// Convert to the JSON error representation.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Message(text) => Value::String(text.clone()),
            Self::Shape(errors) => errors.to_json(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(text) => f.write_str(text),
            Self::Shape(errors) => write!(f, "{}", errors.to_json()),
        }
    }
}

impl From<ShapeErrors> for Violation {
    fn from(errors: ShapeErrors) -> Self {
        Self::Shape(errors)
    }
}

/// Failures of an object shape, keyed by field name.
///
/// Only failing fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShapeErrors(BTreeMap<String, Violation>);

impl ShapeErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, violation: Violation) {
        self.0.insert(field.into(), violation);
    }

    /// Get the violation recorded for a field.
    pub fn get(&self, field: &str) -> Option<&Violation> {
        self.0.get(field)
    }

    /// Get the message recorded for a leaf field.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Violation::as_message)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Violation)> {
        self.0.iter().map(|(field, violation)| (field.as_str(), violation))
    }

    /// Flatten nested failures into `(dotted path, message)` pairs.
    ///
    /// Useful for form libraries that key error messages by field path,
    /// e.g. `("address.zip", "Input is too short")`.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut flat = Vec::new();
        self.collect_into("", &mut flat);
        flat
    }

    fn collect_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for (field, violation) in &self.0 {
            let path = if prefix.is_empty() {
                field.clone()
            } else {
                format!("{prefix}.{field}")
            };
            match violation {
                Violation::Message(text) => out.push((path, text.clone())),
                Violation::Shape(nested) => nested.collect_into(&path, out),
            }
        }
    }

    /// Convert to a JSON object of messages and nested objects.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(field, violation)| (field.clone(), violation.to_json()))
                .collect(),
        )
    }
}

impl<K: Into<String>> FromIterator<(K, Violation)> for ShapeErrors {
    fn from_iter<I: IntoIterator<Item = (K, Violation)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
