//! Validation options.
//!
//! Options are plain data and can be loaded from JSON configuration:
//!
//! ```rust
//! use shapeguard::ValidateOptions;
//!
//! let options: ValidateOptions = serde_json::from_str(r#"{ "abortEarly": true }"#).unwrap();
//! assert!(options.abort_early);
//! ```

use serde::{Deserialize, Serialize};

/// Options controlling how an object shape aggregates field failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateOptions {
    /// Stop at the first failing field instead of collecting all of them.
    pub abort_early: bool,
}

impl ValidateOptions {
    /// Options that collect every failing field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that stop at the first failing field.
    pub fn abort_early() -> Self {
        Self { abort_early: true }
    }

    pub fn with_abort_early(mut self, abort_early: bool) -> Self {
        self.abort_early = abort_early;
        self
    }
}
