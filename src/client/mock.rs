//! Mock service client for testing
//!
//! Provides an in-memory implementation of the API traits so loader and
//! command logic can be exercised without a running service.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use super::api::{AuthApi, CollectionApi, RawApi, RawResponse};
use super::models::{AuthToken, Collection, RecordId, RemoteRecord};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Behaves like a tiny in-memory service: `create` assigns increasing
/// integer ids, `delete` of an unknown id answers 404. Every call is
/// captured in order.
///
/// # Example
/// ```ignore
/// let mock = MockServiceClient::new()
///     .with_records(Collection::Companies, vec![record(7, "Acme")])
///     .await;
///
/// delete_all(&mock, Collection::Companies).await?;
/// assert_eq!(mock.captured_requests().await.len(), 2);
/// ```
pub struct MockServiceClient {
    /// Records currently "stored", per collection
    records: Arc<Mutex<HashMap<Collection, Vec<RemoteRecord>>>>,
    /// Next id handed out by create
    next_id: Arc<Mutex<i64>>,
    /// Accepted login, as (email, password)
    credentials: Arc<Mutex<Option<(String, String)>>>,
    /// Error to return on the given call number (1-based)
    fail_on: Arc<Mutex<Option<(usize, ApiError)>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockServiceClient {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(100)),
            credentials: Arc::new(Mutex::new(None)),
            fail_on: Arc::new(Mutex::new(None)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// HTTP method, upper case
    pub method: String,
    /// Path relative to the base URL
    pub path: String,
    /// JSON body, if one was sent
    pub body: Option<Value>,
}

impl CapturedRequest {
    /// `"DELETE /companies/7"`
    pub fn line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Build a remote record with the given id and name.
pub fn record(id: i64, name: &str) -> RemoteRecord {
    RemoteRecord {
        id: RecordId::Int(id),
        name: name.to_string(),
        fields: Map::new(),
    }
}

impl MockServiceClient {
    /// Create a new mock client with empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection with existing records.
    pub async fn with_records(self, collection: Collection, records: Vec<RemoteRecord>) -> Self {
        self.records.lock().await.insert(collection, records);
        self
    }

    /// Accept only this email/password pair on authenticate.
    pub async fn with_credentials(self, email: &str, password: &str) -> Self {
        *self.credentials.lock().await = Some((email.to_string(), password.to_string()));
        self
    }

    /// Fail the `call`-th request (1-based, counting every request) with `error`.
    pub async fn fail_on_call(self, call: usize, error: ApiError) -> Self {
        *self.fail_on.lock().await = Some((call, error));
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// `"METHOD /path"` for every captured request, in order.
    pub async fn request_lines(&self) -> Vec<String> {
        self.captured_requests
            .lock()
            .await
            .iter()
            .map(CapturedRequest::line)
            .collect()
    }

    /// Records currently stored in a collection.
    pub async fn stored(&self, collection: Collection) -> Vec<RemoteRecord> {
        self.records
            .lock()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Capture a request and return the configured failure if it is due.
    async fn capture(&self, method: &str, path: String, body: Option<&Value>) -> Result<()> {
        let call = {
            let mut captured = self.captured_requests.lock().await;
            captured.push(CapturedRequest {
                method: method.to_string(),
                path,
                body: body.cloned(),
            });
            captured.len()
        };

        let mut fail_on = self.fail_on.lock().await;
        if matches!(*fail_on, Some((n, _)) if n == call) {
            if let Some((_, err)) = fail_on.take() {
                return Err(err.into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockServiceClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthToken> {
        let login = serde_json::json!({"email": email, "password": password});
        self.capture("POST", "/login".to_string(), Some(&login))
            .await?;

        let credentials = self.credentials.lock().await;
        match credentials.as_ref() {
            Some((e, p)) if e != email || p != password => Err(ApiError::Http {
                status: 401,
                body: r#"{"error":"invalid authentication credentials"}"#.to_string(),
            }
            .into()),
            _ => Ok(AuthToken {
                token: "MOCKTOKEN0000000000000000A".to_string(),
                expires_at: None,
            }),
        }
    }
}

#[async_trait]
impl CollectionApi for MockServiceClient {
    async fn list(&self, collection: Collection) -> Result<Vec<RemoteRecord>> {
        self.capture("GET", collection.path(), None).await?;
        Ok(self.stored(collection).await)
    }

    async fn create(&self, collection: Collection, body: &Value) -> Result<RemoteRecord> {
        self.capture("POST", collection.path(), Some(body)).await?;

        let id = {
            let mut next_id = self.next_id.lock().await;
            *next_id += 1;
            *next_id
        };

        let mut fields = body.as_object().cloned().unwrap_or_default();
        // Passwords are never echoed back by the service
        fields.remove("password");
        let name = fields
            .remove("name")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        let created = RemoteRecord {
            id: RecordId::Int(id),
            name,
            fields,
        };
        self.records
            .lock()
            .await
            .entry(collection)
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<()> {
        self.capture("DELETE", collection.record_path(id), None)
            .await?;

        let mut records = self.records.lock().await;
        let stored = records.entry(collection).or_default();
        match stored.iter().position(|r| &r.id == id) {
            Some(idx) => {
                stored.remove(idx);
                Ok(())
            }
            None => Err(ApiError::Http {
                status: 404,
                body: r#"{"error":"the requested resource could not be found"}"#.to_string(),
            }
            .into()),
        }
    }
}

#[async_trait]
impl RawApi for MockServiceClient {
    async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse> {
        self.capture(method.as_str(), path.to_string(), body)
            .await?;
        Ok(RawResponse {
            status: 200,
            body: r#"{"ok":true}"#.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_create_then_list() {
        let mock = MockServiceClient::new();
        let body = serde_json::json!({"name": "Close", "url": "https://close.com"});

        let created = mock.create(Collection::Companies, &body).await.unwrap();
        assert_eq!(created.name, "Close");

        let listed = mock.list(Collection::Companies).await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_mock_delete_unknown_is_404() {
        let mock = MockServiceClient::new();
        let err = mock
            .delete(Collection::Users, &RecordId::Int(1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_mock_fail_on_call() {
        let mock = MockServiceClient::new()
            .fail_on_call(
                2,
                ApiError::Http {
                    status: 500,
                    body: "boom".to_string(),
                },
            )
            .await;

        assert!(mock.list(Collection::Users).await.is_ok());
        assert!(mock.list(Collection::Users).await.is_err());
        assert!(mock.list(Collection::Users).await.is_ok());
        assert_eq!(mock.captured_requests().await.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_rejects_wrong_credentials() {
        let mock = MockServiceClient::new()
            .with_credentials("admin@example.com", "secret")
            .await;

        assert!(mock.authenticate("admin@example.com", "secret").await.is_ok());
        assert!(mock.authenticate("admin@example.com", "nope").await.is_err());
    }
}
