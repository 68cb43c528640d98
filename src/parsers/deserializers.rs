use chrono::{DateTime, Utc};
use serde_json::Value;

/// Convert a transcript timestamp to epoch milliseconds.
///
/// Accepts integers (already milliseconds), floats (truncated) and RFC3339 strings.
/// Returns `None` for anything else.
pub fn timestamp_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.parse::<DateTime<Utc>>().ok().map(|dt| dt.timestamp_millis()),
        _ => None,
    }
}
