//! Validation tests module.
//!
//! Suites are organized by the part of the API they exercise.

pub mod arrays;
pub mod strings;

// Re-export commonly used test utilities
pub use crate::common::{
    builders::{OrderBuilder, SignupBuilder},
    expect_shape,
    fixtures::{address_schema, order_schema, signup_schema},
    init_logging, modify_json, remove_field,
};

// Re-export assertion macros
pub use crate::{assert_field_error, assert_message, assert_schema_error, assert_valid};
