//! Declarative validation for JSON data.
//!
//! Build a schema from leaf validators and object shapes, then run it
//! against a `serde_json::Value` to get either `None` (valid) or a
//! [`Violation`] describing every failed constraint.
//!
//! # Core Components
//!
//! - [`Validatable`] - Contract shared by every validator
//! - [`ObjectValidator`] - Object shapes with error aggregation and targeted validation
//! - [`StringValidator`], [`NumberValidator`], [`BooleanValidator`],
//!   [`DateValidator`], [`ArrayValidator`] - Leaf validators
//! - [`SchemaError`] - Schema-usage errors, kept apart from validation results
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::{ValidateOptions, Validatable, array, number, object, string};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let address = object()
//!     .field("street", string().required())
//!     .field("zip", string().required().exact_length(5))
//!     .build()?;
//!
//! let user = object()
//!     .field("email", string().required().email())
//!     .field("age", number().integer().at_least(18.0)?)
//!     .field("address", address)
//!     .field("tags", array().of(string().at_least(2)))
//!     .no_unknown()
//!     .build()?;
//!
//! let input = json!({
//!     "email": "ada@example.com",
//!     "age": 36,
//!     "address": { "street": "12 Analytical Row", "zip": "123" }
//! });
//!
//! let errors = user.validate_with(&input, &ValidateOptions::default());
//! assert_eq!(
//!     errors.map(|e| e.to_json()),
//!     Some(json!({ "address": { "zip": "Input must be exactly 5 long" } }))
//! );
//!
//! // Re-check one field while the user edits it.
//! let zip = user.validate_at("address.zip", &json!({ "address": { "zip": "12345" } }))?;
//! assert!(zip.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The crate logs through the `log` facade and never installs a logger.
//! Object schema construction and targeted validation log at `debug`,
//! individual field failures at `trace`.

pub mod config;
pub mod error;
pub mod schema;
pub mod validators;

// Re-export commonly used types for convenience
pub use config::ValidateOptions;
pub use error::{ErrorResult, SchemaError, SchemaResult, ShapeErrors, Violation};
pub use schema::{
    Context, Node, NodeKind, ObjectBuilder, ObjectShape, ObjectValidator, PathToken, Rule,
    RuleChain, Validatable,
};
pub use validators::{
    ArrayValidator, BooleanValidator, Choice, DateValidator, NumberValidator, StringValidator,
    array, boolean, date, number, object, string,
};
