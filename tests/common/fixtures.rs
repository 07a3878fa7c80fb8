//! Reusable schemas for the validation suites.

use shapeguard::{Choice, ObjectValidator, array, boolean, date, number, object, string};

pub fn address_schema() -> ObjectValidator {
    object()
        .field("street", string().required())
        .field("city", string().required())
        .field(
            "zip",
            string()
                .required()
                .exact_length(5)
                .message("Zip must be 5 characters"),
        )
        .build()
        .expect("Failed to build address schema")
}

/// A registration form exercising every leaf validator.
pub fn signup_schema() -> ObjectValidator {
    object()
        .field(
            "username",
            string()
                .required()
                .at_least(3)
                .at_most(20)
                .pattern("^[a-z0-9_]+$")
                .expect("Failed to compile username pattern"),
        )
        .field("email", string().required().email())
        .field("password", string().required().at_least(8))
        .field(
            "confirmPassword",
            string()
                .required()
                .one_of([Choice::sibling("password")])
                .expect("Failed to build confirmation rule")
                .message("Passwords must match"),
        )
        .field(
            "age",
            number()
                .integer()
                .at_least(18.0)
                .expect("Failed to build age rule"),
        )
        .field(
            "birthday",
            date().before("2010-01-01").expect("Failed to build birthday rule"),
        )
        .field("website", string().url())
        .field(
            "acceptTerms",
            boolean()
                .required()
                .must_be_true()
                .message("You must accept the terms"),
        )
        .field("address", address_schema())
        .field("tags", array().of(string().at_least(2)).at_most(5))
        .no_unknown()
        .build()
        .expect("Failed to build signup schema")
}

pub fn order_schema() -> ObjectValidator {
    let line_item = object()
        .field(
            "sku",
            string()
                .required()
                .pattern("^[A-Z]{3}-[0-9]{3}$")
                .expect("Failed to compile sku pattern"),
        )
        .field(
            "qty",
            number()
                .required()
                .integer()
                .between(1.0, 99.0)
                .expect("Failed to build quantity rule"),
        )
        .no_unknown()
        .build()
        .expect("Failed to build line item schema");

    object()
        .field("id", string().required())
        .field("items", array().required().at_least(1).of(line_item))
        .build()
        .expect("Failed to build order schema")
}
