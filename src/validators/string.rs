//! String validator.
//!
//! Strings, numbers and booleans are validated through their textual form,
//! so `16` measures as two characters. Arrays and objects are rejected.
//! Blank input (absent, `null` or whitespace-only) passes every rule except
//! `required`.

use super::primitive::{as_text, impl_primitive_rules, is_blank};
use crate::config::ValidateOptions;
use crate::error::{ErrorResult, SchemaError, SchemaResult, Violation};
use crate::schema::{Context, Node, NodeKind, Rule, RuleChain, Validatable};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use url::Url;

const NOT_A_STRING_MESSAGE: &str = "Input is not a string";
const TOO_SHORT_MESSAGE: &str = "Input is too short";
const TOO_LONG_MESSAGE: &str = "Input is too long";
const PATTERN_MESSAGE: &str = "Input does not match the pattern";
const URL_MESSAGE: &str = "Input is not a valid url";
const EMAIL_MESSAGE: &str = "Input is not a valid email";

const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$"#,
    )
    .expect("email pattern is valid")
});

/// Validator for textual values.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{Validatable, string};
///
/// let name = string().required().at_least(2).at_most(20);
/// assert!(name.validate(&json!("Ada")).is_none());
/// assert_eq!(
///     name.validate(&json!("   ")).unwrap().as_message(),
///     Some("This field is required")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    rules: RuleChain,
}

impl_primitive_rules!(StringValidator, is_blank);

impl StringValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require more than `length` characters.
    pub fn greater_than(self, length: usize) -> Self {
        self.rule(length_rule("greater_than", TOO_SHORT_MESSAGE, move |n| n > length))
    }

    /// Require fewer than `length` characters.
    pub fn less_than(self, length: usize) -> Self {
        self.rule(length_rule("less_than", TOO_LONG_MESSAGE, move |n| n < length))
    }

    /// Require at least `length` characters.
    pub fn at_least(self, length: usize) -> Self {
        self.rule(length_rule("at_least", TOO_SHORT_MESSAGE, move |n| n >= length))
    }

    /// Require at most `length` characters.
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

    /// Require exactly `length` characters.
    pub fn exact_length(self, length: usize) -> Self {
        let message = format!("Input must be exactly {length} long");
        self.rule(length_rule("exact_length", message, move |n| n == length))
    }

    /// Require the text to match a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] if `pattern` does not compile.
    pub fn pattern(self, pattern: &str) -> SchemaResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.matches(regex))
    }

    /// Require the text to match a compiled regular expression.
    pub fn matches(self, regex: Regex) -> Self {
        self.rule(text_rule("pattern", PATTERN_MESSAGE, move |text| {
            regex.is_match(text)
        }))
    }

    /// Require an absolute http, https or ftp URL with a host.
    pub fn url(self) -> Self {
        self.rule(text_rule("url", URL_MESSAGE, is_url))
    }

    /// Require an email address.
    pub fn email(self) -> Self {
        self.rule(text_rule("email", EMAIL_MESSAGE, |text| EMAIL.is_match(text)))
    }
}

fn is_url(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    match Url::parse(text) {
        Ok(url) => {
            URL_SCHEMES.contains(&url.scheme()) && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// A rule over the text of non-blank values.
fn text_rule<F>(name: &'static str, message: impl Into<String>, accept: F) -> Rule
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    Rule::value(name, message, move |value| {
        if is_blank(value) {
            return true;
        }
        match value.and_then(as_text) {
            Some(text) => accept(&text),
            None => true,
        }
    })
}

/// A rule over the character count of non-blank values.
fn length_rule<F>(name: &'static str, message: impl Into<String>, accept: F) -> Rule
where
    F: Fn(usize) -> bool + Send + Sync + 'static,
{
    text_rule(name, message, move |text| accept(text.chars().count()))
}

impl Validatable for StringValidator {
    fn kind(&self) -> NodeKind {
        NodeKind::String
    }

    fn validate_in(
        &self,
        value: Option<&Value>,
        context: &Context<'_>,
        _options: &ValidateOptions,
    ) -> ErrorResult {
        if let Some(present) = value.filter(|v| !v.is_null()) {
            if as_text(present).is_none() {
                return Some(Violation::message(NOT_A_STRING_MESSAGE));
            }
        }
        self.rules.run(value, context).map(Violation::Message)
    }
}

impl From<StringValidator> for Node {
    fn from(validator: StringValidator) -> Self {
        Node::leaf(validator)
    }
}
