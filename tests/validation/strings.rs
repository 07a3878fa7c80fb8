//! String validation tests.
//!
//! Covers the length boundary policy, blank handling, patterns and the
//! url/email formats.

use super::*;
use serde_json::{Value, json};
use shapeguard::{SchemaError, Validatable, string};

#[test]
fn test_greater_than_is_exclusive() {
    let v = string().greater_than(3);
    assert_message!(v.validate(&json!("abc")), "Input is too short");
    assert_valid!(v.validate(&json!("abcd")));
}

#[test]
fn test_less_than_is_exclusive() {
    let v = string().less_than(3);
    assert_message!(v.validate(&json!("abc")), "Input is too long");
    assert_valid!(v.validate(&json!("ab")));
}

#[test]
fn test_at_least_and_at_most_are_inclusive() {
    let v = string().at_least(3).at_most(5);
    assert_valid!(v.validate(&json!("abc")));
    assert_valid!(v.validate(&json!("abcde")));
    assert_message!(v.validate(&json!("ab")), "Input is too short");
    assert_message!(v.validate(&json!("abcdef")), "Input is too long");
}

#[test]
fn test_min_and_max_alias_the_exclusive_rules() {
    let min = string().min(2);
    assert_message!(min.validate(&json!("ab")), "Input is too short");
    assert_valid!(min.validate(&json!("abc")));

    let max = string().max(2);
    assert_message!(max.validate(&json!("ab")), "Input is too long");
    assert_valid!(max.validate(&json!("a")));
}

#[test]
fn test_exact_length() {
    let v = string().exact_length(5);
    assert_valid!(v.validate(&json!("12345")));
    assert_message!(v.validate(&json!("1234")), "Input must be exactly 5 long");
    assert_message!(v.validate(&json!("123456")), "Input must be exactly 5 long");
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let v = string().exact_length(4);
    assert_valid!(v.validate(&json!("Zoë!")));
    assert_valid!(v.validate(&json!("日本語!")));
}

#[test]
fn test_numbers_are_measured_by_their_text() {
    let v = string().at_least(3);
    assert_message!(v.validate(&json!(16)), "Input is too short");
    assert_valid!(v.validate(&json!(1600)));
    assert_valid!(v.validate(&json!(true)));
}

#[test]
fn test_blank_values_skip_every_rule_but_required() {
    let v = string().at_least(3).email().url();
    for blank in [json!(""), json!("   "), Value::Null] {
        assert_valid!(v.validate(&blank));
    }
    assert_valid!(v.validate_optional(None));

    let required = string().required().at_least(3);
    for blank in [json!(""), json!("   "), Value::Null] {
        assert_message!(required.validate(&blank), "This field is required");
    }
    assert_message!(required.validate_optional(None), "This field is required");
}

#[test]
fn test_required_with_custom_message() {
    let v = string().required().message("Please enter a name");
    for empty in [json!(""), json!("   "), Value::Null] {
        assert_message!(v.validate(&empty), "Please enter a name");
    }
    assert_message!(v.validate_optional(None), "Please enter a name");
    assert_valid!(v.validate(&json!("a")));
}

#[test]
fn test_first_failing_rule_wins() {
    let v = string()
        .required()
        .message("Name is required")
        .at_least(2)
        .message("Name is too short")
        .at_most(4);

    assert_message!(v.validate(&json!("")), "Name is required");
    assert_message!(v.validate(&json!("a")), "Name is too short");
    assert_message!(v.validate(&json!("abcde")), "Input is too long");
}

#[test]
fn test_message_without_rules_is_ignored() {
    let v = string().message("orphan").at_least(2);
    assert_message!(v.validate(&json!("a")), "Input is too short");
    assert_eq!(v.rules().len(), 1);
}

#[test]
fn test_non_scalar_input_is_rejected() {
    let v = string();
    assert_message!(v.validate(&json!(["a"])), "Input is not a string");
    assert_message!(v.validate(&json!({ "a": 1 })), "Input is not a string");
}

#[test]
fn test_pattern() {
    let v = string().pattern("^[a-z]+$").unwrap();
    assert_valid!(v.validate(&json!("lower")));
    assert_message!(v.validate(&json!("Upper")), "Input does not match the pattern");
}

#[test]
fn test_invalid_pattern_is_a_schema_error() {
    assert_schema_error!(
        string().pattern("([a-z"),
        SchemaError::InvalidPattern { .. }
    );
}

#[test]
fn test_email() {
    let v = string().email();
    for address in ["ada@example.com", "first.last@sub.example.org", "a+tag@x.io"] {
        assert_valid!(v.validate(&json!(address)));
    }
    for address in ["ada", "ada@", "@example.com", "ada@example", "a b@example.com"] {
        assert_message!(v.validate(&json!(address)), "Input is not a valid email");
    }
}

#[test]
fn test_url() {
    let v = string().url();
    for url in [
        "https://example.com",
        "http://localhost:8080/path?q=1",
        "ftp://files.example.com/pub",
    ] {
        assert_valid!(v.validate(&json!(url)));
    }
    for url in ["example.com", "mailto:ada@example.com", "https://", "http://exa mple.com"] {
        assert_message!(v.validate(&json!(url)), "Input is not a valid url");
    }
}

#[test]
fn test_one_of_and_not_one_of() {
    let v = string().one_of(["red", "green"]).unwrap();
    assert_valid!(v.validate(&json!("red")));
    assert_valid!(v.validate(&json!("")));
    assert_message!(v.validate(&json!("blue")), "Invalid option");

    let v = string().not_one_of(["admin", "root"]).unwrap();
    assert_valid!(v.validate(&json!("ada")));
    assert_message!(v.validate(&json!("root")), "Invalid option");

    assert_schema_error!(
        string().one_of(Vec::<&str>::new()),
        SchemaError::InvalidConstraint { rule: "one_of", .. }
    );
}

#[test]
fn test_not_allowed() {
    let v = string().not_allowed();
    assert_valid!(v.validate_optional(None));
    assert_valid!(v.validate(&Value::Null));
    assert_message!(v.validate(&json!("")), "Field is not allowed");
}

#[test]
fn test_custom_rule() {
    let v = string().test("Must not contain spaces", |value, _| {
        value
            .and_then(Value::as_str)
            .is_none_or(|text| !text.contains(' '))
    });
    assert_valid!(v.validate(&json!("ada")));
    assert_message!(v.validate(&json!("a b")), "Must not contain spaces");
    assert_eq!(v.rules().names().collect::<Vec<_>>(), vec!["test"]);
}
