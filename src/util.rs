use serde_json::Value;

/// Renders a JSON value the way it is printed: strings bare, anything else as
/// compact JSON (`null` for a missing field).
pub fn render_value(val: &Value) -> String {
    match val {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
