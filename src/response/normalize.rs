use serde_json::{Map, Value};

use super::{AssistantContent, ComparisonAnswer, NormalizedAnswer};

/// Classifies one backend payload. Total: every input becomes either text or a record.
///
/// A `result` envelope is unwrapped first, JSON-encoded strings are decoded,
/// and text that does not decode to an object is shown as-is.
pub fn normalize(value: Value) -> AssistantContent {
    match value {
        Value::Object(mut map) => match map.remove("result") {
            Some(inner) => normalize(inner),
            None => classify_record(&map),
        },
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(parsed @ Value::Object(_)) => normalize(parsed),
            Ok(Value::String(inner)) => AssistantContent::PlainText(inner),
            _ => AssistantContent::PlainText(text),
        },
        other => AssistantContent::PlainText(other.to_string()),
    }
}

fn classify_record(map: &Map<String, Value>) -> AssistantContent {
    if ComparisonAnswer::matches(map) {
        AssistantContent::Comparison(ComparisonAnswer::from_map(map))
    } else {
        AssistantContent::Answer(NormalizedAnswer::from_map(map))
    }
}
