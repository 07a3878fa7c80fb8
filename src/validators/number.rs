//! Number validator.
//!
//! Accepts JSON numbers and strings holding a finite number, so form input
//! such as `"42"` validates like `42`.

use super::primitive::{impl_primitive_rules, is_absent};
use crate::config::ValidateOptions;
use crate::error::{ErrorResult, SchemaError, SchemaResult, Violation};
use crate::schema::{Context, Node, NodeKind, Rule, RuleChain, Validatable};
use serde_json::Value;

const NOT_A_NUMBER_MESSAGE: &str = "The field is not a valid number";
const TOO_SMALL_MESSAGE: &str = "Input is too small";
const TOO_LARGE_MESSAGE: &str = "Input is too large";
const INTEGER_MESSAGE: &str = "Input must be an integer";
const POSITIVE_MESSAGE: &str = "Input must be positive";
const NEGATIVE_MESSAGE: &str = "Input must be negative";

/// Validator for numeric values.
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    rules: RuleChain,
}

impl_primitive_rules!(NumberValidator, is_absent);

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn finite(rule: &'static str, threshold: f64) -> SchemaResult<f64> {
    if threshold.is_finite() {
        Ok(threshold)
    } else {
        Err(SchemaError::invalid_constraint(
            rule,
            format!("threshold must be a finite number, got {threshold}"),
        ))
    }
}

/// A rule over the numeric value of present input.
fn number_rule<F>(name: &'static str, message: impl Into<String>, accept: F) -> Rule
where
    F: Fn(f64) -> bool + Send + Sync + 'static,
{
    Rule::value(name, message, move |value| {
        match value.filter(|v| !v.is_null()).and_then(as_number) {
            Some(number) => accept(number),
            None => true,
        }
    })
}

impl NumberValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a value strictly greater than `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidConstraint`] for a non-finite threshold.
    /// The same applies to every other threshold rule.
    pub fn greater_than(self, threshold: f64) -> SchemaResult<Self> {
        let threshold = finite("greater_than", threshold)?;
        Ok(self.rule(number_rule("greater_than", TOO_SMALL_MESSAGE, move |n| {
            n > threshold
        })))
    }

    /// Require a value strictly less than `threshold`.
    pub fn less_than(self, threshold: f64) -> SchemaResult<Self> {
        let threshold = finite("less_than", threshold)?;
        Ok(self.rule(number_rule("less_than", TOO_LARGE_MESSAGE, move |n| {
            n < threshold
        })))
    }

    /// Require a value greater than or equal to `threshold`.
    pub fn at_least(self, threshold: f64) -> SchemaResult<Self> {
        let threshold = finite("at_least", threshold)?;
        Ok(self.rule(number_rule("at_least", TOO_SMALL_MESSAGE, move |n| {
            n >= threshold
        })))
    }

    /// Require a value less than or equal to `threshold`.
    pub fn at_most(self, threshold: f64) -> SchemaResult<Self> {
        let threshold = finite("at_most", threshold)?;
        Ok(self.rule(number_rule("at_most", TOO_LARGE_MESSAGE, move |n| {
            n <= threshold
        })))
    }

    /// Alias for [`greater_than`](Self::greater_than).
    pub fn min(self, threshold: f64) -> SchemaResult<Self> {
        self.greater_than(threshold)
    }

    /// Alias for [`less_than`](Self::less_than).
    pub fn max(self, threshold: f64) -> SchemaResult<Self> {
        self.less_than(threshold)
    }

    /// Require `low <= value <= high`.
    pub fn between(self, low: f64, high: f64) -> SchemaResult<Self> {
        let low = finite("between", low)?;
        let high = finite("between", high)?;
        if low > high {
            return Err(SchemaError::invalid_constraint(
                "between",
                format!("lower bound {low} exceeds upper bound {high}"),
            ));
        }
        let message = format!("Input must be between {low} and {high}");
        Ok(self.rule(number_rule("between", message, move |n| {
            (low..=high).contains(&n)
        })))
    }

    pub fn integer(self) -> Self {
        self.rule(number_rule("integer", INTEGER_MESSAGE, |n| n.fract() == 0.0))
    }

    pub fn positive(self) -> Self {
        self.rule(number_rule("positive", POSITIVE_MESSAGE, |n| n > 0.0))
    }

    pub fn negative(self) -> Self {
        self.rule(number_rule("negative", NEGATIVE_MESSAGE, |n| n < 0.0))
    }
}

impl Validatable for NumberValidator {
    fn kind(&self) -> NodeKind {
        NodeKind::Number
    }

    fn validate_in(
        &self,
        value: Option<&Value>,
        context: &Context<'_>,
        _options: &ValidateOptions,
    ) -> ErrorResult {
        if let Some(present) = value.filter(|v| !v.is_null()) {
            if as_number(present).is_none() {
                return Some(Violation::message(NOT_A_NUMBER_MESSAGE));
            }
        }
        self.rules.run(value, context).map(Violation::Message)
    }
}

impl From<NumberValidator> for Node {
    fn from(validator: NumberValidator) -> Self {
        Node::leaf(validator)
    }
}
