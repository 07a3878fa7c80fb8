//! Array validator.
//!
//! Length rules follow the same boundary policy as strings, measured in
//! items. [`ArrayValidator::of`] declares the item schema; it is also what
//! targeted validation descends into for paths such as `items.0.name`.

use super::primitive::{impl_primitive_rules, is_absent};
use crate::config::ValidateOptions;
use crate::error::{ErrorResult, Violation};
use crate::schema::{Context, Node, NodeKind, Rule, RuleChain, Validatable};
use serde_json::Value;

const NOT_AN_ARRAY_MESSAGE: &str = "Input is not an array";
const TOO_SHORT_MESSAGE: &str = "Input is too short";
const TOO_LONG_MESSAGE: &str = "Input is too long";
const INVALID_ITEMS_MESSAGE: &str = "One or more elements are of invalid type";
const MISSING_ITEM_MESSAGE: &str = "Input does not contain a required value";
const UNEXPECTED_ITEM_MESSAGE: &str = "Input contains values that are not allowed";

/// Validator for arrays.
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{Validatable, array, string};
///
/// let tags = array().of(string().at_least(2)).at_most(3);
/// assert!(tags.validate(&json!(["rust", "json"])).is_none());
/// assert_eq!(
///     tags.validate(&json!(["rust", "x"])).unwrap().as_message(),
///     Some("One or more elements are of invalid type")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArrayValidator {
    rules: RuleChain,
    item: Option<Node>,
}

impl_primitive_rules!(ArrayValidator, is_absent);

/// A rule over the items of present arrays.
fn items_rule<F>(name: &'static str, message: impl Into<String>, accept: F) -> Rule
where
    F: Fn(&[Value], &Context<'_>) -> bool + Send + Sync + 'static,
{
    Rule::new(name, message, move |value, context| {
        match value.and_then(Value::as_array) {
            Some(items) => accept(items, context),
            None => true,
        }
    })
}

fn length_rule<F>(name: &'static str, message: impl Into<String>, accept: F) -> Rule
where
    F: Fn(usize) -> bool + Send + Sync + 'static,
{
    items_rule(name, message, move |items, _| accept(items.len()))
}

impl ArrayValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The item schema declared with [`of`](Self::of).
    pub fn item(&self) -> Option<&Node> {
        self.item.as_ref()
    }

    /// Validate every element against `item`.
    ///
    /// Element failures collapse into a single message for the array.
    pub fn of(mut self, item: impl Into<Node>) -> Self {
        let item = item.into();
        self.item = Some(item.clone());
        self.rule(items_rule("of", INVALID_ITEMS_MESSAGE, move |items, context| {
            let options = ValidateOptions::abort_early();
            items
                .iter()
                .all(|element| item.validate_in(Some(element), context, &options).is_none())
        }))
    }

    /// Require more than `length` items.
    pub fn greater_than(self, length: usize) -> Self {
        self.rule(length_rule("greater_than", TOO_SHORT_MESSAGE, move |n| n > length))
    }

    /// Require fewer than `length` items.
    pub fn less_than(self, length: usize) -> Self {
        self.rule(length_rule("less_than", TOO_LONG_MESSAGE, move |n| n < length))
    }

    pub fn at_least(self, length: usize) -> Self {
        self.rule(length_rule("at_least", TOO_SHORT_MESSAGE, move |n| n >= length))
    }

    pub fn at_most(self, length: usize) -> Self {
        self.rule(length_rule("at_most", TOO_LONG_MESSAGE, move |n| n <= length))
    }

    /// Alias for [`greater_than`](Self::greater_than).
    pub fn min(self, length: usize) -> Self {
        self.greater_than(length)
    }

    /// Alias for [`less_than`](Self::less_than).
    pub fn max(self, length: usize) -> Self {
        self.less_than(length)
    }

    pub fn exact_length(self, length: usize) -> Self {
        let message = format!("Input must be exactly {length} long");
        self.rule(length_rule("exact_length", message, move |n| n == length))
    }

    /// Require `value` to be one of the elements.
    pub fn must_contain(self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.rule(items_rule("must_contain", MISSING_ITEM_MESSAGE, move |items, _| {
            items.contains(&value)
        }))
    }

    /// Require every element to be one of `allowed`.
    pub fn has_only<I, V>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
        self.rule(items_rule("has_only", UNEXPECTED_ITEM_MESSAGE, move |items, _| {
            items.iter().all(|element| allowed.contains(element))
        }))
    }
}

impl Validatable for ArrayValidator {
    fn kind(&self) -> NodeKind {
        NodeKind::Array
    }

    fn validate_in(
        &self,
        value: Option<&Value>,
        context: &Context<'_>,
        _options: &ValidateOptions,
    ) -> ErrorResult {
        if value.is_some_and(|v| !v.is_null() && !v.is_array()) {
            return Some(Violation::message(NOT_AN_ARRAY_MESSAGE));
        }
        self.rules.run(value, context).map(Violation::Message)
    }
}
