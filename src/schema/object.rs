//! Composite object validation.
//!
//! An [`ObjectValidator`] owns an [`ObjectShape`] mapping field names to
//! child nodes and a chain of object-level pre-check rules. Schemas are
//! composed on an [`ObjectBuilder`] and finalized with
//! [`ObjectBuilder::build`]; the resulting validator is immutable.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::{ValidateOptions, Validatable, object, string};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = object()
//!     .field("name", string().required().min(2))
//!     .field("age", string().min(18))
//!     .build()?;
//!
//! let errors = schema
//!     .validate_with(&json!({ "name": "A", "age": 16 }), &ValidateOptions::default())
//!     .expect("both fields fail");
//! assert_eq!(
//!     errors.to_json(),
//!     json!({ "name": "Input is too short", "age": "Input is too short" })
//! );
//! # Ok(())
//! # }
//! ```

use super::context::Context;
use super::node::{Node, NodeKind, Validatable};
use super::path::{parse_path, resolve_with_parent, PathToken};
use super::rule::{Rule, RuleChain};
use crate::config::ValidateOptions;
use crate::error::{ErrorResult, SchemaError, SchemaResult, ShapeErrors, Violation};
use log::{debug, trace, warn};
use serde_json::Value;
use std::sync::Arc;

const NO_UNKNOWN: &str = "no_unknown";
const DEFAULT_NO_UNKNOWN_MESSAGE: &str = "Input contains invalid keys";
const NOT_AN_OBJECT_MESSAGE: &str = "Input is not an object";

/// Ordered mapping from field name to child node.
///
/// Iteration follows declaration order. Re-declaring a field replaces its
/// node in place; fields are never removed.
#[derive(Debug, Clone, Default)]
pub struct ObjectShape {
    fields: Vec<(String, Node)>,
}

impl ObjectShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, returning the shape for chaining.
    pub fn with(mut self, name: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(name, node);
        self
    }

    /// Declare a field, replacing any existing declaration with the same name.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<Node>) {
        let name = name.into();
        let node = node.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, existing)) => *existing = node,
            None => self.fields.push((name, node)),
        }
    }

    /// Merge every declaration of `other` into this shape.
    pub fn merge(&mut self, other: &ObjectShape) {
        for (name, node) in &other.fields {
            self.insert(name.clone(), node.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, node)| node)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(field, _)| field.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.fields.iter().map(|(field, node)| (field.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Accumulates the declaration of an object schema.
#[derive(Debug, Clone, Default)]
#[must_use = "call build() to obtain a validator"]
pub struct ObjectBuilder {
    shape: ObjectShape,
    rules: RuleChain,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge field declarations; existing fields are overwritten.
    pub fn shape(mut self, shape: ObjectShape) -> Self {
        self.shape.merge(&shape);
        self
    }

    /// Declare a single field.
    pub fn field(mut self, name: impl Into<String>, node: impl Into<Node>) -> Self {
        self.shape.insert(name, node);
        self
    }

    /// Copy the field declarations of another object validator.
    ///
    /// Only fields are copied; the other validator's object-level rules are not.
    pub fn extend(mut self, base: &ObjectValidator) -> Self {
        self.shape.merge(&base.shape);
        self
    }

    /// Reject entries containing keys that are not declared in the shape.
    ///
    /// The check runs against the final shape, so fields declared after this
    /// call are still known keys. Building fails if the shape is empty.
    pub fn no_unknown(mut self) -> Self {
        // The predicate is bound to the final shape in build().
        self.rules
            .push(Rule::value(NO_UNKNOWN, DEFAULT_NO_UNKNOWN_MESSAGE, |_| true));
        self
    }

    /// Register a custom object-level rule that runs before field validation.
    pub fn test<F>(mut self, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(Option<&Value>, &Context<'_>) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new("test", message, predicate));
        self
    }

    /// Replace the message of the most recently added object-level rule.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.rules.relabel_last(message);
        self
    }

    /// Finalize the schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NoUnknownWithoutShape`] if `no_unknown` was
    /// registered but no field has been declared.
    pub fn build(self) -> SchemaResult<ObjectValidator> {
        let ObjectBuilder { shape, rules } = self;

        if rules.contains(NO_UNKNOWN) && shape.is_empty() {
            return Err(SchemaError::NoUnknownWithoutShape);
        }

        let known: Arc<Vec<String>> = Arc::new(shape.keys().map(str::to_string).collect());
        let mut bound = RuleChain::new();
        for rule in rules.iter() {
            if rule.name() == NO_UNKNOWN {
                let known = Arc::clone(&known);
                bound.push(Rule::value(NO_UNKNOWN, rule.message(), move |entry| {
                    has_only_known_keys(entry, &known)
                }));
            } else {
                bound.push(rule.clone());
            }
        }

        debug!(
            "Built object schema with {} field(s) and {} object rule(s)",
            shape.len(),
            bound.len()
        );

        Ok(ObjectValidator {
            shape,
            rules: bound,
        })
    }
}

fn has_only_known_keys(entry: Option<&Value>, known: &[String]) -> bool {
    match entry.and_then(Value::as_object) {
        Some(map) => map.keys().all(|key| known.iter().any(|k| k == key)),
        None => true,
    }
}

/// Validates an object against a declared field shape.
#[derive(Debug, Clone)]
pub struct ObjectValidator {
    shape: ObjectShape,
    rules: RuleChain,
}

impl ObjectValidator {
    /// Start declaring an object schema.
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::new()
    }

    /// A builder seeded with this validator's fields and rules.
    pub fn to_builder(&self) -> ObjectBuilder {
        ObjectBuilder {
            shape: self.shape.clone(),
            rules: self.rules.clone(),
        }
    }

    pub fn shape(&self) -> &ObjectShape {
        &self.shape
    }

    /// Resolve the schema node addressed by a path.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidPath`] for a path without segments and
    /// [`SchemaError::UnresolvedPath`] when a segment names no declared node.
    pub fn node_at(&self, path: &str) -> SchemaResult<&Node> {
        let tokens = parse_path(path);
        self.resolve_node(&tokens, path)
    }

    fn resolve_node(&self, tokens: &[PathToken], path: &str) -> SchemaResult<&Node> {
        let mut current: Option<&Node> = None;

        for token in tokens {
            let next = match (current, token) {
                (None, PathToken::Key(key)) => self.shape.get(key),
                (None, PathToken::Index(_)) => continue,
                (Some(node), token) => node.descend(token),
            };
            match next {
                Some(node) => current = Some(node),
                None => {
                    warn!("Path '{}' has no schema node at segment '{}'", path, token);
                    return Err(SchemaError::unresolved_path(path, token));
                }
            }
        }

        current.ok_or_else(|| SchemaError::InvalidPath {
            path: path.to_string(),
        })
    }

    /// Validate a single field of `entry` addressed by `path`.
    ///
    /// The node at `path` is called with the value at `path` and a root
    /// context whose entry is the value at the parent path, so sibling rules
    /// see the field's immediate siblings. Absent or `null` intermediate
    /// values resolve the field to an absent value.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] when the path is empty, names no declared
    /// schema node, or cannot be traversed in `entry`
    /// ([`SchemaError::PathMismatch`]). Input failures are reported in the
    /// `Ok` value.
    pub fn validate_at(&self, path: &str, entry: &Value) -> SchemaResult<ErrorResult> {
        let tokens = parse_path(path);
        let node = self.resolve_node(&tokens, path)?;
        let (value, parent) = resolve_with_parent(entry, &tokens, path)?;

        debug!(
            "Validating '{}' against {} node ({} segment(s))",
            path,
            node.kind(),
            tokens.len()
        );

        Ok(node.validate_in(value, &Context::root(parent), &ValidateOptions::default()))
    }
}

impl Validatable for ObjectValidator {
    fn kind(&self) -> NodeKind {
        NodeKind::Object
    }

    fn validate_in(
        &self,
        value: Option<&Value>,
        context: &Context<'_>,
        options: &ValidateOptions,
    ) -> ErrorResult {
        let entry = value.filter(|v| !v.is_null());
        if entry.is_some_and(|v| !v.is_object()) {
            return Some(Violation::message(NOT_AN_OBJECT_MESSAGE));
        }

        if let Some(message) = self.rules.run(entry, context) {
            return Some(Violation::Message(message));
        }

        let child_context = Context::child(entry, context);
        let mut errors = ShapeErrors::new();

        for (field, node) in self.shape.iter() {
            let field_value = entry.and_then(|e| e.get(field));
            if let Some(violation) = node.validate_in(field_value, &child_context, options) {
                trace!("Field '{}' failed validation: {}", field, violation);
                errors.insert(field, violation);

                if options.abort_early {
                    return Some(Violation::Shape(errors));
                }
            }
        }

        if errors.is_empty() {
            None
        } else {
            Some(Violation::Shape(errors))
        }
    }
}
