//! Boolean validator.

use super::primitive::{impl_primitive_rules, is_absent};
use crate::config::ValidateOptions;
use crate::error::{ErrorResult, Violation};
use crate::schema::{Context, Node, NodeKind, Rule, RuleChain, Validatable};
use serde_json::Value;

const NOT_A_BOOLEAN_MESSAGE: &str = "Input is not a boolean";

/// Validator for JSON booleans. Strings such as `"true"` are rejected.
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    rules: RuleChain,
}

impl_primitive_rules!(BooleanValidator, is_absent);

fn expect(name: &'static str, expected: bool) -> Rule {
    Rule::value(name, format!("Input must be {expected}"), move |value| {
        match value.and_then(Value::as_bool) {
            Some(flag) => flag == expected,
            None => true,
        }
    })
}

impl BooleanValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept only `true` (e.g. a terms-of-service checkbox).
    pub fn must_be_true(self) -> Self {
        self.rule(expect("must_be_true", true))
    }

    pub fn must_be_false(self) -> Self {
        self.rule(expect("must_be_false", false))
    }
}

impl Validatable for BooleanValidator {
    fn kind(&self) -> NodeKind {
        NodeKind::Boolean
    }

    fn validate_in(
        &self,
        value: Option<&Value>,
        context: &Context<'_>,
        _options: &ValidateOptions,
    ) -> ErrorResult {
        if value.is_some_and(|v| !v.is_null() && !v.is_boolean()) {
            return Some(Violation::message(NOT_A_BOOLEAN_MESSAGE));
        }
        self.rules.run(value, context).map(Violation::Message)
    }
}

impl From<BooleanValidator> for Node {
    fn from(validator: BooleanValidator) -> Self {
        Node::leaf(validator)
    }
}
