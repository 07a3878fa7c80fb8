//! Schema composition and traversal.
//!
//! This module provides the rule-chain execution model, the composite object
//! validator and the path resolution used for targeted field validation.
//!
//! # Key Types
//!
//! - [`Validatable`] - Contract implemented by every validator
//! - [`RuleChain`] - Ordered predicate steps, first failure wins
//! - [`ObjectValidator`] - Field shape validation with error aggregation
//! - [`Node`] - Child node of an object shape (leaf, object or array)
//! - [`Context`] - Sibling record and link to the enclosing context
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::{object, string};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let address = object().field("zip", string().exact_length(5)).build()?;
//! let user = object().field("address", address).build()?;
//!
//! let entry = json!({ "address": { "zip": "123" } });
//! let result = user.validate_at("address.zip", &entry)?;
//! assert_eq!(
//!     result.and_then(|v| v.as_message().map(str::to_string)).as_deref(),
//!     Some("Input must be exactly 5 long")
//! );
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod node;
pub mod object;
pub mod path;
pub mod rule;


pub use context::{Ancestors, Context};
pub use node::{Node, NodeKind, Validatable};
pub use object::{ObjectBuilder, ObjectShape, ObjectValidator};
pub use path::{PathToken, parse_path};
pub use rule::{Rule, RuleChain};
