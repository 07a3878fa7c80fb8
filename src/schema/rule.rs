//! Rules and rule chains.
//!
//! A [`Rule`] is a single named predicate step with the message it reports
//! on failure. A [`RuleChain`] runs its rules in declaration order and stops
//! at the first failure.

use super::context::Context;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(Option<&Value>, &Context<'_>) -> bool + Send + Sync;

/// A single validation step.
///
/// The predicate returns `true` when the value is acceptable.
#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    message: String,
    predicate: Arc<Predicate>,
}

impl Rule {
    /// Create a rule from a predicate over the value and its context.
    pub fn new<F>(name: &'static str, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(Option<&Value>, &Context<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Create a rule that only looks at the value.
    pub fn value<F>(name: &'static str, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self::new(name, message, move |value, _| predicate(value))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the rule, returning its message on failure.
    pub fn check(&self, value: Option<&Value>, context: &Context<'_>) -> Option<String> {
        if (self.predicate)(value, context) {
            None
        } else {
            Some(self.message.clone())
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

/// An ordered sequence of rules; first failure wins.
#[derive(Debug, Clone, Default)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Replace the message of the most recently added rule.
    ///
    /// Returns `false` when the chain is empty.
    pub fn relabel_last(&mut self, message: impl Into<String>) -> bool {
        match self.rules.last_mut() {
            Some(rule) => {
                rule.message = message.into();
                true
            }
            None => false,
        }
    }

    /// Run every rule in order and return the first failure message.
    pub fn run(&self, value: Option<&Value>, context: &Context<'_>) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.check(value, context))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
