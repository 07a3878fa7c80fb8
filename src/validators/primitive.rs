//! Rules and helpers shared by every leaf validator.
//!
//! Every leaf validator carries a [`RuleChain`](crate::schema::RuleChain) and
//! gets `required`, `not_allowed`, `one_of`, `not_one_of`, `test` and
//! `message` from the `impl_primitive_rules!` macro.

use crate::error::{SchemaError, SchemaResult};
use crate::schema::{Context, Rule};
use serde_json::Value;
use std::borrow::Cow;

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required";
pub(crate) const NOT_ALLOWED_MESSAGE: &str = "Field is not allowed";
pub(crate) const INVALID_OPTION_MESSAGE: &str = "Invalid option";

/// An accepted (or rejected) value for `one_of` / `not_one_of`.
///
/// A choice is either a literal JSON value or a reference to a sibling field
/// resolved through the validation context, which is how "confirm password"
/// style checks are expressed:
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{Choice, Validatable, object, string};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let form = object()
///     .field("password", string().required())
///     .field(
///         "confirm",
///         string().one_of([Choice::sibling("password")])?.message("Passwords must match"),
///     )
///     .build()?;
///
/// let errors = form.validate(&json!({ "password": "hunter22", "confirm": "hunter2" }));
/// assert_eq!(
///     errors.unwrap().as_shape().unwrap().message("confirm"),
///     Some("Passwords must match")
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    /// A literal value
    Literal(Value),
    /// The value of a sibling field
    Sibling(String),
}

impl Choice {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn sibling(field: impl Into<String>) -> Self {
        Self::Sibling(field.into())
    }

    fn resolve<'a>(&'a self, context: &Context<'a>) -> Option<&'a Value> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Sibling(field) => context.sibling(field),
        }
    }

    fn matches(&self, value: &Value, context: &Context<'_>) -> bool {
        self.resolve(context).is_some_and(|candidate| candidate == value)
    }
}

impl From<Value> for Choice {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<i64> for Choice {
    fn from(value: i64) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<f64> for Choice {
    fn from(value: f64) -> Self {
        Self::Literal(Value::from(value))
    }
}

impl From<bool> for Choice {
    fn from(value: bool) -> Self {
        Self::Literal(Value::from(value))
    }
}

/// `None` or JSON `null`.
pub(crate) fn is_absent(value: Option<&Value>) -> bool {
    value.is_none_or(Value::is_null)
}

/// Absent, or a string with no non-whitespace characters.
pub(crate) fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(_) => false,
    }
}

/// Textual rendering of scalar values; arrays and objects have none.
pub(crate) fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text)),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        _ => None,
    }
}

pub(crate) fn required(is_empty: fn(Option<&Value>) -> bool) -> Rule {
    Rule::value("required", REQUIRED_MESSAGE, move |value| !is_empty(value))
}

pub(crate) fn not_allowed() -> Rule {
    Rule::value("not_allowed", NOT_ALLOWED_MESSAGE, is_absent)
}

/// Membership rule; `accept_members` selects `one_of` or `not_one_of`.
pub(crate) fn membership(
    name: &'static str,
    choices: Vec<Choice>,
    accept_members: bool,
    is_empty: fn(Option<&Value>) -> bool,
) -> SchemaResult<Rule> {
    if choices.is_empty() {
        return Err(SchemaError::invalid_constraint(
            name,
            "at least one choice is required",
        ));
    }

    Ok(Rule::new(name, INVALID_OPTION_MESSAGE, move |value, context| {
        if is_empty(value) {
            return true;
        }
        let Some(value) = value else {
            return true;
        };
        let is_member = choices.iter().any(|choice| choice.matches(value, context));
        is_member == accept_members
    }))
}

/// Implements the rules shared by every leaf validator.
///
/// The validator type must have a `rules: RuleChain` field. `$is_empty`
/// decides which values count as empty for `required` and membership rules.
macro_rules! impl_primitive_rules {
    ($validator:ty, $is_empty:path) => {
        impl $validator {
            /// Reject empty values.
            pub fn required(self) -> Self {
                self.rule($crate::validators::primitive::required($is_empty))
            }

            /// Reject any value other than absent or `null`.
            pub fn not_allowed(self) -> Self {
                self.rule($crate::validators::primitive::not_allowed())
            }

            /// Accept only values equal to one of `choices`.
            ///
            /// # Errors
            ///
            /// Returns [`SchemaError::InvalidConstraint`](crate::SchemaError)
            /// if `choices` is empty.
            pub fn one_of<I, C>(self, choices: I) -> $crate::error::SchemaResult<Self>
            where
                I: IntoIterator<Item = C>,
                C: Into<$crate::validators::Choice>,
            {
                let rule = $crate::validators::primitive::membership(
                    "one_of",
                    choices.into_iter().map(Into::into).collect(),
                    true,
                    $is_empty,
                )?;
                Ok(self.rule(rule))
            }

            /// Reject values equal to any of `choices`.
            ///
            /// # Errors
            ///
            /// Returns [`SchemaError::InvalidConstraint`](crate::SchemaError)
            /// if `choices` is empty.
            pub fn not_one_of<I, C>(self, choices: I) -> $crate::error::SchemaResult<Self>
            where
                I: IntoIterator<Item = C>,
                C: Into<$crate::validators::Choice>,
            {
                let rule = $crate::validators::primitive::membership(
                    "not_one_of",
                    choices.into_iter().map(Into::into).collect(),
                    false,
                    $is_empty,
                )?;
                Ok(self.rule(rule))
            }

            /// Add a custom rule; `predicate` returns `true` for acceptable values.
            pub fn test<F>(self, message: impl Into<String>, predicate: F) -> Self
            where
                F: Fn(Option<&serde_json::Value>, &$crate::schema::Context<'_>) -> bool
                    + Send
                    + Sync
                    + 'static,
            {
                self.rule($crate::schema::Rule::new("test", message, predicate))
            }

            /// Replace the message of the most recently added rule.
            pub fn message(mut self, message: impl Into<String>) -> Self {
                self.rules.relabel_last(message);
                self
            }

            /// The rules attached to this validator, in declaration order.
            pub fn rules(&self) -> &$crate::schema::RuleChain {
                &self.rules
            }

            fn rule(mut self, rule: $crate::schema::Rule) -> Self {
                self.rules.push(rule);
                self
            }
        }
    };
}

pub(crate) use impl_primitive_rules;
