//! Remote records and the collections that hold them

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A named set of remote records, addressed by its own sub-path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Companies,
    Users,
}

impl Collection {
    /// Every collection, in seeding order
    pub const ALL: [Collection; 2] = [Collection::Companies, Collection::Users];

    /// Path segment and list-response key (`companies`)
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Companies => "companies",
            Collection::Users => "users",
        }
    }

    /// Envelope key used when the service returns a single record (`company`)
    pub fn singular(&self) -> &'static str {
        match self {
            Collection::Companies => "company",
            Collection::Users => "user",
        }
    }

    /// Path of the collection relative to the base URL
    pub fn path(&self) -> String {
        format!("/{}", self.name())
    }

    /// Path of one record relative to the base URL
    pub fn record_path(&self, id: &RecordId) -> String {
        format!("/{}/{}", self.name(), id)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record identity, owned by the service.
///
/// The service uses integers today; strings are accepted so the loader
/// never has to care.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Str(id) => f.write_str(id),
        }
    }
}

/// Whatever the service returns for a listed or created entity.
///
/// Only `id` and `name` are relied on; every other field is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRecord {
    pub id: RecordId,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RemoteRecord {
    /// Look up a field other than `id`/`name`
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Parse the body of a create response.
    ///
    /// The service wraps created records as `{"company": {...}}`; a bare
    /// record is accepted as well.
    pub fn from_created(collection: Collection, body: Value) -> Result<Self, ApiError> {
        let record = match body {
            Value::Object(mut map) if map.get(collection.singular()).is_some_and(Value::is_object) => {
                map.remove(collection.singular()).unwrap_or_default()
            }
            other => other,
        };

        serde_json::from_value(record).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "Failed to parse created {}: {}",
                collection.singular(),
                e
            ))
        })
    }

    /// Parse the body of a list response (`{"companies": [...], "metadata": {...}}`)
    pub fn from_listing(collection: Collection, mut body: Value) -> Result<Vec<Self>, ApiError> {
        let items = body
            .get_mut(collection.name())
            .map(Value::take)
            .ok_or_else(|| {
                ApiError::InvalidResponse(format!(
                    "Response is missing the '{}' key",
                    collection.name()
                ))
            })?;

        // The service serializes an empty result as null
        if items.is_null() {
            return Ok(Vec::new());
        }

        serde_json::from_value(items).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse {}: {}", collection.name(), e))
        })
    }
}
