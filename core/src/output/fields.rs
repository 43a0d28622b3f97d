use common::records::NormalizedRecord;
use log::error;
use serde_json::Value;

/// Flatten a record into (column name, rendered value) pairs in field order
pub(crate) fn record_fields(record: &NormalizedRecord) -> Vec<(String, String)> {
    let value = match serde_json::to_value(record) {
        Ok(result) => result,
        Err(err) => {
            error!("[output] Could not serialize record: {err:?}");
            return Vec::new();
        }
    };

    let Value::Object(map) = value else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    for (key, value) in map {
        let rendered = match value {
            Value::String(text) => text,
            other => other.to_string(),
        };
        fields.push((key, rendered));
    }
    fields
}
