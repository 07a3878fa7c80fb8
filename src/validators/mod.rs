//! Leaf validator builders.
//!
//! Each factory returns an empty validator; builder calls append one rule
//! each and return the validator, so constraints read in the order they run:
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::{Validatable, number, string};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let username = string().required().at_least(3).pattern("^[a-z0-9_]+$")?;
//! let age = number().integer().at_least(18.0)?.message("Adults only");
//!
//! assert!(username.validate(&json!("ada_l")).is_none());
//! assert_eq!(
//!     age.validate(&json!(16)).unwrap().as_message(),
//!     Some("Adults only")
//! );
//! # Ok(())
//! # }
//! ```

mod array;
mod boolean;
mod date;
mod number;
pub(crate) mod primitive;
mod string;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use date::DateValidator;
pub use number::NumberValidator;
pub use primitive::Choice;
pub use string::StringValidator;

use crate::schema::ObjectBuilder;

pub fn string() -> StringValidator {
    StringValidator::new()
}

pub fn number() -> NumberValidator {
    NumberValidator::new()
}

pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

pub fn date() -> DateValidator {
    DateValidator::new()
}

pub fn array() -> ArrayValidator {
    ArrayValidator::new()
}

/// Start declaring an object schema; finish with [`ObjectBuilder::build`].
pub fn object() -> ObjectBuilder {
    ObjectBuilder::new()
}
