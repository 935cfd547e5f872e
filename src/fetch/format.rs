//! Response formatting
//!
//! Turns a decoded response body of unknown shape into a short, readable
//! summary. Formatting never fails: any error while rendering falls back to
//! the payload dumped as indented JSON.

use std::fmt::Write;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::fetch::types::Payload;

/// Message returned for an empty JSON array, whatever the source
pub const EMPTY_ARRAY_MESSAGE: &str = "The API returned an empty array.";

/// Number of items shown for an array of objects
const SAMPLE_ITEMS: usize = 3;

/// Arrays nested in an object are listed element by element up to this size
const MAX_LISTED_ELEMENTS: usize = 5;

/// Rendered in place of a field that is not present
const ABSENT: &str = "undefined";

/// Errors raised while rendering; never leave this module
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] std::fmt::Error),
}

type FormatResult<T> = std::result::Result<T, FormatError>;

/// Shape of a payload, which selects the rendering
#[derive(Debug)]
enum Shape<'a> {
    EmptyArray,
    ObjectArray(&'a [Value]),
    ScalarArray(&'a [Value]),
    Object(&'a Map<String, Value>),
    Scalar(&'a Value),
    Text(&'a str),
}

impl<'a> Shape<'a> {
    fn of(payload: &'a Payload) -> Self {
        match payload {
            Payload::Text(text) => Shape::Text(text),
            Payload::Json(Value::Array(items)) => match items.first() {
                None => Shape::EmptyArray,
                Some(Value::Object(_)) => Shape::ObjectArray(items),
                Some(_) => Shape::ScalarArray(items),
            },
            Payload::Json(Value::Object(map)) => Shape::Object(map),
            Payload::Json(value) => Shape::Scalar(value),
        }
    }
}

/// Format `payload` received from `source` as human-readable text
pub fn format_payload(payload: &Payload, source: &str) -> String {
    format_with(payload, source, render)
}

fn format_with<F>(payload: &Payload, source: &str, render: F) -> String
where
    F: FnOnce(&Payload, &str) -> FormatResult<String>,
{
    match render(payload, source) {
        Ok(text) => text.trim_end().to_string(),
        Err(e) => {
            tracing::debug!("Formatting response from {} failed, dumping raw JSON: {}", source, e);
            fallback(payload, source)
        }
    }
}

fn fallback(payload: &Payload, source: &str) -> String {
    let raw = match payload {
        Payload::Json(value) => format!("{:#}", value),
        Payload::Text(text) => format!("{:#}", Value::String(text.clone())),
    };
    format!("{}{}", header(source), raw)
}

fn render(payload: &Payload, source: &str) -> FormatResult<String> {
    match Shape::of(payload) {
        Shape::EmptyArray => Ok(EMPTY_ARRAY_MESSAGE.to_string()),
        Shape::ObjectArray(items) => render_object_array(items, source),
        Shape::ScalarArray(items) => render_scalar_array(items, source),
        Shape::Object(map) => render_object(map, source),
        Shape::Scalar(value) => Ok(format!("{}{}", header(source), inline(value)?)),
        Shape::Text(text) => Ok(format!("{}{}", header(source), text)),
    }
}

fn header(source: &str) -> String {
    format!("Response from {}:\n\n", source)
}

fn array_header(count: usize, source: &str) -> String {
    format!("Found {} items from {}:\n\n", count, source)
}

fn render_object_array(items: &[Value], source: &str) -> FormatResult<String> {
    let mut out = array_header(items.len(), source);

    for (i, item) in items.iter().take(SAMPLE_ITEMS).enumerate() {
        writeln!(out, "Item {}:", i + 1)?;
        match item {
            Value::Object(fields) => {
                for (key, value) in fields {
                    writeln!(out, "  {}: {}", key, inline(value)?)?;
                }
            }
            other => writeln!(out, "  value: {}", inline(other)?)?,
        }
        out.push('\n');
    }

    if items.len() > SAMPLE_ITEMS {
        writeln!(out, "... and {} more items", items.len() - SAMPLE_ITEMS)?;
    }

    Ok(out)
}

/// Unlike arrays of objects, every item is printed.
fn render_scalar_array(items: &[Value], source: &str) -> FormatResult<String> {
    let mut out = array_header(items.len(), source);
    let joined = items
        .iter()
        .map(inline)
        .collect::<FormatResult<Vec<_>>>()?
        .join(", ");
    writeln!(out, "{}", joined)?;
    Ok(out)
}

fn render_object(map: &Map<String, Value>, source: &str) -> FormatResult<String> {
    let mut out = header(source);

    if let Some(error) = map.get("error") {
        writeln!(out, "Error: {}", inline(error)?)?;
        writeln!(out, "Message: {}", field_or_absent(map, "message")?)?;
        return Ok(out);
    }

    if let Some(status) = map.get("status") {
        writeln!(out, "Status: {}", inline(status)?)?;
    } else if let Some(Value::Bool(success)) = map.get("success") {
        writeln!(out, "Status: {}", if *success { "Success" } else { "Failed" })?;
    }

    for (key, value) in map {
        if key == "status" || key == "success" {
            continue;
        }

        let label = capitalize(key);
        match value {
            Value::Array(items) => {
                writeln!(out, "{}: {} items", label, items.len())?;
                if (1..=MAX_LISTED_ELEMENTS).contains(&items.len()) {
                    for item in items {
                        writeln!(out, "  - {}", inline(item)?)?;
                    }
                }
            }
            Value::Object(nested) => {
                writeln!(out, "{}:", label)?;
                for (nested_key, nested_value) in nested {
                    writeln!(out, "  • {}: {}", nested_key, inline(nested_value)?)?;
                }
            }
            scalar => writeln!(out, "{}: {}", label, inline(scalar)?)?,
        }
    }

    Ok(out)
}

fn field_or_absent(map: &Map<String, Value>, key: &str) -> FormatResult<String> {
    match map.get(key) {
        Some(value) => inline(value),
        None => Ok(ABSENT.to_string()),
    }
}

/// Single-line rendering: strings unquoted, containers as compact JSON
fn inline(value: &Value) -> FormatResult<String> {
    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value)?,
    })
}

/// Uppercase the first character only
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SOURCE: &str = "https://api.example.com/data";

    fn format_json(value: Value) -> String {
        format_payload(&Payload::Json(value), SOURCE)
    }

    #[test]
    fn test_empty_array_is_fixed_message() {
        assert_eq!(format_json(json!([])), EMPTY_ARRAY_MESSAGE);
        assert_eq!(
            format_payload(&Payload::Json(json!([])), "http://other.example"),
            EMPTY_ARRAY_MESSAGE
        );
    }

    #[test]
    fn test_object_array_truncates_after_three() {
        let text = format_json(json!([{"a": 1}, {"a": 2}, {"a": 3}, {"a": 4}]));
        assert!(text.starts_with("Found 4 items from https://api.example.com/data:"));
        assert!(text.contains("Item 1:\n  a: 1"));
        assert!(text.contains("Item 3:\n  a: 3"));
        assert!(!text.contains("Item 4:"));
        assert!(!text.contains("a: 4"));
        assert_eq!(text.matches("Item ").count(), 3);
        assert!(text.ends_with("... and 1 more items"));
    }

    #[test]
    fn test_object_array_without_truncation() {
        let text = format_json(json!([{"name": "x", "tags": ["a", "b"], "meta": {"k": 1}}]));
        assert!(text.contains("  name: x"));
        assert!(text.contains("  tags: [\"a\",\"b\"]"));
        assert!(text.contains("  meta: {\"k\":1}"));
        assert!(!text.contains("more items"));
    }

    // Arrays of primitives are never truncated while arrays of objects are.
    // Both behaviours are kept as-is.
    #[test]
    fn test_scalar_array_is_not_truncated() {
        let text = format_json(json!([1, 2, 3, 4, 5, 6, 7]));
        assert!(text.contains("Found 7 items"));
        assert!(text.ends_with("1, 2, 3, 4, 5, 6, 7"));
        assert!(!text.contains("more items"));
    }

    #[test]
    fn test_error_object_short_circuits() {
        let text = format_json(json!({"error": "E", "message": "M", "extra": "hidden"}));
        assert_eq!(text, "Response from https://api.example.com/data:\n\nError: E\nMessage: M");
    }

    #[test]
    fn test_error_without_message_uses_absence_marker() {
        let text = format_json(json!({"error": {"code": 7}}));
        assert!(text.contains("Error: {\"code\":7}"));
        assert!(text.contains("Message: undefined"));
    }

    #[test]
    fn test_status_field_not_repeated() {
        let text = format_json(json!({"status": "ok", "count": 5}));
        assert!(text.contains("Status: ok"));
        assert!(text.contains("Count: 5"));
        assert_eq!(text.matches("Status").count(), 1);
    }

    #[test]
    fn test_success_flag_becomes_status() {
        assert!(format_json(json!({"success": true, "id": 3})).contains("Status: Success"));
        let failed = format_json(json!({"success": false}));
        assert!(failed.contains("Status: Failed"));
        assert!(!failed.contains("Success:"));
    }

    #[test]
    fn test_status_takes_precedence_over_success() {
        let text = format_json(json!({"success": false, "status": 201}));
        assert!(text.contains("Status: 201"));
        assert!(!text.contains("Failed"));
    }

    #[test]
    fn test_object_fields_keep_response_order() {
        let text = format_json(json!({"zeta": 1, "alpha": 2}));
        let zeta = text.find("Zeta: 1").unwrap();
        let alpha = text.find("Alpha: 2").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_array_fields() {
        let text = format_json(json!({
            "few": ["a", {"b": 1}],
            "many": [1, 2, 3, 4, 5, 6],
            "none": []
        }));
        assert!(text.contains("Few: 2 items\n  - a\n  - {\"b\":1}"));
        assert!(text.contains("Many: 6 items\nNone: 0 items"));
        assert!(!text.contains("  - 6"));
    }

    #[test]
    fn test_nested_object_one_level() {
        let text = format_json(json!({"user": {"name": "Ada", "roles": ["admin"], "x": {"y": 1}}}));
        assert!(text.contains("User:\n  • name: Ada\n  • roles: [\"admin\"]\n  • x: {\"y\":1}"));
    }

    #[test]
    fn test_capitalize_first_character_only() {
        assert_eq!(capitalize("userName"), "UserName");
        assert_eq!(capitalize("_id"), "_id");
        assert_eq!(capitalize(""), "");
        assert!(format_json(json!({"createdAt": "today"})).contains("CreatedAt: today"));
    }

    #[test]
    fn test_primitive_values() {
        assert_eq!(format_json(json!(42)), "Response from https://api.example.com/data:\n\n42");
        assert!(format_json(json!(null)).ends_with("null"));
        assert!(format_json(json!("hello")).ends_with("\n\nhello"));
        let text = format_payload(&Payload::Text("<html>hi</html>".into()), SOURCE);
        assert!(text.ends_with("<html>hi</html>"));
    }

    #[test]
    fn test_render_failure_falls_back_to_json() {
        let payload = Payload::Json(json!({"key": "value", "n": [1]}));
        let text = format_with(&payload, SOURCE, |_, _| Err(FormatError::Write(std::fmt::Error)));
        assert!(text.starts_with("Response from https://api.example.com/data:\n\n{\n"));
        assert!(text.contains("  \"key\": \"value\""));
        assert!(text.contains("\"n\": [\n    1\n  ]"));
    }
}
