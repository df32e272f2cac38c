use serde_json::Value;

/// Text of a loosely typed JSON value. Null, false, zero and `""` give `None`.
/// Other non-strings are rendered as compact JSON.
pub fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
