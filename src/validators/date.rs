//! Date validator.
//!
//! Dates may be given as RFC 3339 timestamps, `YYYY-MM-DD` calendar dates
//! (midnight UTC) or integer milliseconds since the Unix epoch.

use super::primitive::{impl_primitive_rules, is_blank};
use crate::config::ValidateOptions;
use crate::error::{ErrorResult, SchemaError, SchemaResult, Violation};
use crate::schema::{Context, Node, NodeKind, Rule, RuleChain, Validatable};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

const NOT_A_DATE_MESSAGE: &str = "The field is not a valid date";

/// Validator for dates and timestamps.
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{Validatable, date};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let birthday = date().before("2010-01-01")?;
/// assert!(birthday.validate(&json!("1990-05-17")).is_none());
/// assert!(birthday.validate(&json!("2010-01-01T00:00:00Z")).is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateValidator {
    rules: RuleChain,
}

impl_primitive_rules!(DateValidator, is_blank);

/// Parse a JSON value as an instant.
pub(crate) fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_date_str(text.trim()),
        Value::Number(number) => number.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

fn parse_date_str(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

fn bound(rule: &'static str, text: &str) -> SchemaResult<DateTime<Utc>> {
    parse_date_str(text.trim()).ok_or_else(|| {
        SchemaError::invalid_constraint(rule, format!("'{text}' is not a valid date"))
    })
}

fn date_rule<F>(name: &'static str, message: String, accept: F) -> Rule
where
    F: Fn(DateTime<Utc>) -> bool + Send + Sync + 'static,
{
    Rule::value(name, message, move |value| {
        if is_blank(value) {
            return true;
        }
        match value.and_then(parse_date) {
            Some(instant) => accept(instant),
            None => true,
        }
    })
}

impl DateValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a date strictly before `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidConstraint`] if `limit` is not a date.
    pub fn before(self, limit: &str) -> SchemaResult<Self> {
        let limit = bound("before", limit)?;
        Ok(self.before_instant(limit))
    }

    /// Require a date strictly after `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidConstraint`] if `limit` is not a date.
    pub fn after(self, limit: &str) -> SchemaResult<Self> {
        let limit = bound("after", limit)?;
        Ok(self.after_instant(limit))
    }

    pub fn before_instant(self, limit: DateTime<Utc>) -> Self {
        let message = format!("Date must be before {}", limit.to_rfc3339());
        self.rule(date_rule("before", message, move |instant| instant < limit))
    }

    pub fn after_instant(self, limit: DateTime<Utc>) -> Self {
        let message = format!("Date must be after {}", limit.to_rfc3339());
        self.rule(date_rule("after", message, move |instant| instant > limit))
    }
}

impl Validatable for DateValidator {
    fn kind(&self) -> NodeKind {
        NodeKind::Date
    }

    fn validate_in(
        &self,
        value: Option<&Value>,
        context: &Context<'_>,
        _options: &ValidateOptions,
    ) -> ErrorResult {
        if !is_blank(value) && value.and_then(parse_date).is_none() {
            return Some(Violation::message(NOT_A_DATE_MESSAGE));
        }
        self.rules.run(value, context).map(Violation::Message)
    }
}

impl From<DateValidator> for Node {
    fn from(validator: DateValidator) -> Self {
        Node::leaf(validator)
    }
}
