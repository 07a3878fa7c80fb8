//! Context chain handed to rules during validation.
//!
//! When an object validator descends into a field, the child receives the
//! object being validated (the field's siblings) as its context entry, linked
//! to the context the object itself was validated in. The result is a chain
//! from the innermost field up to the document root that cross-field rules
//! can inspect without the schema holding explicit references.

use serde_json::Value;

/// A link in the context chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context<'a> {
    entry: Option<&'a Value>,
    parent: Option<&'a Context<'a>>,
}

impl<'a> Context<'a> {
    /// A context with no entry and no parent.
    pub fn detached() -> Self {
        Self::default()
    }

    /// A root context carrying `entry` and no parent.
    ///
    /// Targeted validation uses this to hand a field its parent value.
    pub fn root(entry: Option<&'a Value>) -> Self {
        Self {
            entry,
            parent: None,
        }
    }

    /// A context for the fields of `entry`, linked to `parent`.
    pub fn child(entry: Option<&'a Value>, parent: &'a Context<'a>) -> Self {
        Self {
            entry,
            parent: Some(parent),
        }
    }

    /// The record whose fields are being validated.
    pub fn entry(&self) -> Option<&'a Value> {
        self.entry
    }

    /// The enclosing context, if any.
    pub fn parent(&self) -> Option<&'a Context<'a>> {
        self.parent
    }

    /// Look up a sibling field of the value being validated.
    pub fn sibling(&self, key: &str) -> Option<&'a Value> {
        self.entry.and_then(|entry| entry.get(key))
    }

    /// Iterate over this context and every enclosing one, innermost first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: Some(self),
        }
    }

    /// Number of links from this context to the root.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }
}

/// Iterator over a context chain. See [`Context::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'c> {
    next: Option<&'c Context<'c>>,
}

impl<'c> Iterator for Ancestors<'c> {
    type Item = &'c Context<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent;
        Some(current)
    }
}
