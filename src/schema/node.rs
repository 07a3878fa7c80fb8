//! The validatable contract and the schema node tree.

use super::context::Context;
use super::object::ObjectValidator;
use super::path::PathToken;
use crate::config::ValidateOptions;
use crate::error::ErrorResult;
use crate::validators::ArrayValidator;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Discriminant identifying the kind of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    String,
    Number,
    Boolean,
    Date,
    Array,
    Object,
    /// A caller-provided [`Validatable`] implementation
    Custom,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Array => "array",
            Self::Object => "object",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability shared by every validator.
///
/// `validate_in` is a pure function of its arguments: it never mutates the
/// value, the context or the validator, so a single validator can be shared
/// across threads and called concurrently with different inputs.
///
/// An absent value is passed as `None`; JSON `null` as `Some(&Value::Null)`.
pub trait Validatable: fmt::Debug + Send + Sync {
    /// The kind of node this validator represents.
    fn kind(&self) -> NodeKind;

    /// Validate a value in the given context.
    fn validate_in(
        &self,
        value: Option<&Value>,
        context: &Context<'_>,
        options: &ValidateOptions,
    ) -> ErrorResult;

    /// Validate a present value with default options and no context.
    fn validate(&self, value: &Value) -> ErrorResult {
        self.validate_optional(Some(value))
    }

    /// Validate a possibly absent value with default options and no context.
    fn validate_optional(&self, value: Option<&Value>) -> ErrorResult {
        self.validate_in(value, &Context::detached(), &ValidateOptions::default())
    }

    /// Validate a present value with explicit options.
    fn validate_with(&self, value: &Value, options: &ValidateOptions) -> ErrorResult {
        self.validate_in(Some(value), &Context::detached(), options)
    }

    /// The literal type tag of this node, e.g. `"object"`.
    fn get_type(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// A child node in an object shape.
///
/// Objects and arrays are kept as distinct variants so that path resolution
/// can descend through them; every other validator is a leaf.
#[derive(Debug, Clone)]
pub enum Node {
    Leaf(Arc<dyn Validatable>),
    Object(Arc<ObjectValidator>),
    Array(Arc<ArrayValidator>),
}

impl Node {
    /// Wrap a caller-provided validator as a leaf node.
    pub fn leaf(validator: impl Validatable + 'static) -> Self {
        Self::Leaf(Arc::new(validator))
    }

    pub fn kind(&self) -> NodeKind {
        self.as_validatable().kind()
    }

    pub fn as_validatable(&self) -> &dyn Validatable {
        match self {
            Self::Leaf(validator) => validator.as_ref(),
            Self::Object(object) => object.as_ref(),
            Self::Array(array) => array.as_ref(),
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValidator> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Step into the schema along one path token.
    ///
    /// Objects resolve keys to their fields and skip indices, since a path
    /// may address an element of an enclosing array. Arrays resolve both
    /// indices and keys through their item node: one item schema covers
    /// every element. Leaves cannot be entered.
    pub fn descend(&self, token: &PathToken) -> Option<&Node> {
        match (self, token) {
            (Self::Object(object), PathToken::Key(key)) => object.shape().get(key),
            (Self::Object(_), PathToken::Index(_)) => Some(self),
            (Self::Array(array), PathToken::Index(_)) => array.item(),
            (Self::Array(array), PathToken::Key(_)) => {
                array.item().and_then(|item| item.descend(token))
            }
            (Self::Leaf(_), _) => None,
        }
    }
}

impl Validatable for Node {
    fn kind(&self) -> NodeKind {
        Node::kind(self)
    }

    fn validate_in(
        &self,
        value: Option<&Value>,
        context: &Context<'_>,
        options: &ValidateOptions,
    ) -> ErrorResult {
        self.as_validatable().validate_in(value, context, options)
    }
}

impl From<ObjectValidator> for Node {
    fn from(object: ObjectValidator) -> Self {
        Self::Object(Arc::new(object))
    }
}

impl From<ArrayValidator> for Node {
    fn from(array: ArrayValidator) -> Self {
        Self::Array(Arc::new(array))
    }
}

impl From<Arc<dyn Validatable>> for Node {
    fn from(validator: Arc<dyn Validatable>) -> Self {
        Self::Leaf(validator)
    }
}
