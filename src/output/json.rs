//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

use crate::client::Collection;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Collection the data was listed from
    pub collection: Collection,

    /// Number of records in `data`
    pub count: usize,

    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(collection: Collection, count: usize, data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                collection,
                count,
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format records as pretty-printed JSON
pub fn format_json<T: Serialize>(
    collection: Collection,
    records: &[T],
) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(collection, records.len(), records);
    serde_json::to_string_pretty(&output)
}
