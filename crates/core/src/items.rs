//! Line-item blob codec.
//!
//! Documents carry an ordered list of line items serialized as a single JSON
//! text column. The schema of an individual line item is deliberately open: a
//! mapping of field name to value, where only `length`, `weight` and `amount`
//! are meaningful to aggregation. Decoding is strict JSON (never executed) and
//! a malformed or absent blob yields an empty list rather than an error.

use serde_json::Value;

/// A single line item: an open mapping of field name → value.
pub type LineItem = serde_json::Map<String, Value>;

/// Serialize a line-item list for storage.
pub fn encode_line_items(items: &[LineItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a stored blob back into a line-item list.
///
/// Tolerates `None`, empty and malformed content by returning an empty list;
/// callers must never fail because a stored blob is unreadable.
pub fn decode_line_items(blob: Option<&str>) -> Vec<LineItem> {
    let Some(blob) = blob else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<LineItem>>(blob).unwrap_or_default()
}

/// Coerce a line-item field to a number.
///
/// Numbers pass through, numeric strings are parsed, anything else (including
/// a missing key) counts as zero.
pub fn numeric_field(item: &LineItem, key: &str) -> f64 {
    match item.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
