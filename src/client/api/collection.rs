//! Collection API trait for record CRUD

use async_trait::async_trait;
use serde_json::Value;

use crate::client::models::{Collection, RecordId, RemoteRecord};
use crate::error::Result;

/// Record operations on a single collection.
///
/// Every method fails with [`ApiError`](crate::error::ApiError) on a
/// non-2xx status or transport failure.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    /// List every record in the collection
    async fn list(&self, collection: Collection) -> Result<Vec<RemoteRecord>>;

    /// Create one record and return what the service stored
    async fn create(&self, collection: Collection, body: &Value) -> Result<RemoteRecord>;

    /// Delete one record by id
    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<()>;
}
