// Pretty-printer for JSON responses of unknown shape. The API answers
// with either a single object or a list of objects; both are rendered
// as a numbered, indented dump.

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;

/// Normalize a payload into a numbered dump. An object counts as a single
/// item; an array contributes one item per element. Scalar payloads are
/// an error.
pub fn render_items(payload: &Value) -> Result<String> {
    let items: Vec<&Value> = match payload {
        Value::Object(_) => vec![payload],
        Value::Array(elements) => elements.iter().collect(),
        _ => bail!("Unexpected data format, expected an object or a list"),
    };

    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Item {}:\n", idx + 1));
        out.push_str(&pretty(item)?);
    }
    Ok(out)
}

// serde_json's default pretty printer indents with two spaces; the dump
// uses four, so build the formatter explicitly.
fn pretty(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_renders_as_single_item() {
        let out = render_items(&json!({"name": "Acme"})).unwrap();
        assert_eq!(out, "Item 1:\n{\n    \"name\": \"Acme\"\n}");
    }

    #[test]
    fn array_items_are_numbered_from_one() {
        let out = render_items(&json!([{"id": 1}, {"id": 2}])).unwrap();
        assert!(out.starts_with("Item 1:\n"));
        assert!(out.contains("\nItem 2:\n"));
    }

    #[test]
    fn scalar_payload_is_rejected() {
        let err = render_items(&json!("oops")).unwrap_err();
        assert!(err.to_string().contains("Unexpected data format"));
    }
}
