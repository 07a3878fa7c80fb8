//! Test data builders for creating valid and invalid entries.
//!
//! Builders start from an entry that passes [`super::fixtures::signup_schema`]
//! and can be modified one field at a time to target a single failure.

use serde_json::{Value, json};

/// Builder for signup form entries
#[derive(Debug, Clone)]
pub struct SignupBuilder {
    data: Value,
}

impl SignupBuilder {
    /// Create a new SignupBuilder with a complete valid entry
    pub fn new() -> Self {
        Self {
            data: json!({
                "username": "ada_l",
                "email": "ada@example.com",
                "password": "correct horse",
                "confirmPassword": "correct horse",
                "age": 36,
                "birthday": "1990-05-17",
                "website": "https://ada.example.com",
                "acceptTerms": true,
                "address": {
                    "street": "12 Analytical Row",
                    "city": "London",
                    "zip": "12345"
                },
                "tags": ["math", "engines"]
            }),
        }
    }

    /// Create a SignupBuilder with only the required fields
    pub fn minimal() -> Self {
        Self {
            data: json!({
                "username": "ada_l",
                "email": "ada@example.com",
                "password": "correct horse",
                "confirmPassword": "correct horse",
                "acceptTerms": true,
                "address": { "street": "12 Analytical Row", "city": "London", "zip": "12345" }
            }),
        }
    }

    pub fn with(mut self, field: &str, value: Value) -> Self {
        self.data[field] = value;
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        if let Some(map) = self.data.as_object_mut() {
            map.remove(field);
        }
        self
    }

    pub fn with_username(self, username: &str) -> Self {
        self.with("username", json!(username))
    }

    pub fn with_email(self, email: &str) -> Self {
        self.with("email", json!(email))
    }

    pub fn with_passwords(self, password: &str, confirm: &str) -> Self {
        self.with("password", json!(password))
            .with("confirmPassword", json!(confirm))
    }

    pub fn with_zip(mut self, zip: Value) -> Self {
        self.data["address"]["zip"] = zip;
        self
    }

    pub fn with_tags(self, tags: Value) -> Self {
        self.with("tags", tags)
    }

    pub fn build(self) -> Value {
        self.data
    }
}

impl Default for SignupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for order entries with line items
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    id: String,
    items: Vec<Value>,
}

impl OrderBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, sku: &str, qty: i64) -> Self {
        self.items.push(json!({ "sku": sku, "qty": qty }));
        self
    }

    pub fn raw_item(mut self, item: Value) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> Value {
        json!({ "id": self.id, "items": self.items })
    }
}
