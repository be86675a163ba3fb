//! Display helpers for remote records

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::client::RemoteRecord;

/// Bookkeeping fields the service adds to every record
const HIDDEN_FIELDS: [&str; 3] = ["created_at", "updated_at", "version"];

/// Longest DETAILS cell before truncation
const MAX_DETAILS_LEN: usize = 80;

/// One record as a table row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RecordRow {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DETAILS")]
    pub details: String,
}

impl From<&RemoteRecord> for RecordRow {
    fn from(record: &RemoteRecord) -> Self {
        let details = record
            .fields
            .iter()
            .filter(|(key, _)| !HIDDEN_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| format!("{}={}", key, format_value(value)))
            .collect::<Vec<_>>()
            .join("  ");

        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            details: truncate_string(&details, MAX_DETAILS_LEN),
        }
    }
}

/// Render a JSON value compactly: strings bare, arrays comma-joined
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "--".to_string(),
        Value::Array(items) => items.iter().map(format_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
