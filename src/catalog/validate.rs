//! Request Body Validation
//!
//! Create and update share one schema: eight required string fields, none
//! empty, title at least five characters. Bodies are checked as raw JSON so
//! a missing or mistyped field yields a field-level message instead of a
//! deserialization failure.

use serde_json::Value;

use super::types::Product;

const MIN_TITLE_LEN: usize = 5;

/// Schema field names, in the order failures are reported.
const REQUIRED_FIELDS: [&str; 8] = [
    "title",
    "description",
    "price",
    "discountPercentage",
    "rating",
    "stock",
    "brand",
    "category",
];

/// Checks a request body against the record schema.
///
/// Returns the parsed [`Product`] on success, or a message describing the
/// first failing field.
pub fn validate_record(body: &Value) -> Result<Product, String> {
    let object = match body.as_object() {
        Some(object) => object,
        None => return Err("body must be a JSON object".to_string()),
    };

    for field in REQUIRED_FIELDS {
        let value = match object.get(field) {
            Some(value) => value,
            None => return Err(format!("\"{}\" is required", field)),
        };
        let text = match value.as_str() {
            Some(text) => text,
            None => return Err(format!("\"{}\" must be a string", field)),
        };
        if text.is_empty() {
            return Err(format!("\"{}\" is not allowed to be empty", field));
        }
    }

    for field in object.keys() {
        if !REQUIRED_FIELDS.contains(&field.as_str()) {
            return Err(format!("\"{}\" is not allowed", field));
        }
    }

    let title = object["title"].as_str().unwrap_or_default();
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(format!(
            "\"title\" length must be at least {} characters long",
            MIN_TITLE_LEN
        ));
    }

    serde_json::from_value(body.clone()).map_err(|e| format!("invalid record: {}", e))
}
