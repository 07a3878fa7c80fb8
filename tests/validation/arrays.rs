//! Array validation tests.

use super::*;
use serde_json::{Value, json};
use shapeguard::{NodeKind, Validatable, array, number, object, string};

#[test]
fn test_length_boundaries_follow_string_policy() {
    let v = array().greater_than(1).less_than(4);
    assert_message!(v.validate(&json!([1])), "Input is too short");
    assert_valid!(v.validate(&json!([1, 2])));
    assert_valid!(v.validate(&json!([1, 2, 3])));
    assert_message!(v.validate(&json!([1, 2, 3, 4])), "Input is too long");

    let exact = array().exact_length(2);
    assert_message!(exact.validate(&json!([])), "Input must be exactly 2 long");
}

#[test]
fn test_empty_array_is_present() {
    let v = array().required();
    assert_valid!(v.validate(&json!([])));
    assert_message!(v.validate(&Value::Null), "This field is required");
}

#[test]
fn test_item_schema_applies_to_every_element() {
    let v = array().of(number().integer());
    assert_valid!(v.validate(&json!([1, 2, 3])));
    assert_valid!(v.validate(&json!([])));
    assert_message!(
        v.validate(&json!([1, 2.5])),
        "One or more elements are of invalid type"
    );
    assert_eq!(v.item().map(|item| item.kind()), Some(NodeKind::Number));
}

#[test]
fn test_nested_object_items() {
    let order = order_schema();
    let entry = OrderBuilder::new("A-1").item("ABC-123", 2).build();
    assert_valid!(order.validate(&entry));

    let entry = OrderBuilder::new("A-2")
        .item("ABC-123", 2)
        .raw_item(json!({ "sku": "ABC-123", "qty": 2, "gift": true }))
        .build();
    assert_field_error!(
        order.validate(&entry),
        "items",
        "One or more elements are of invalid type"
    );
}

#[test]
fn test_order_requires_at_least_one_item() {
    let order = order_schema();
    assert_field_error!(
        order.validate(&OrderBuilder::new("A-3").build()),
        "items",
        "Input is too short"
    );
}

#[test]
fn test_item_message_can_be_customized() {
    let v = array()
        .of(object().field("id", string().required()).build().unwrap())
        .message("Every row needs an id");
    assert_message!(v.validate(&json!([{ "id": "1" }, {}])), "Every row needs an id");
}

#[test]
fn test_must_contain_and_has_only() {
    let v = array().must_contain("owner").has_only(["owner", "member"]);
    assert_valid!(v.validate(&json!(["member", "owner"])));
    assert_message!(
        v.validate(&json!(["member"])),
        "Input does not contain a required value"
    );
    assert_message!(
        v.validate(&json!(["owner", "guest"])),
        "Input contains values that are not allowed"
    );
}
