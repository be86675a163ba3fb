//! HTTP client for the job-hunt service

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, Response};
use serde_json::Value;

use super::api::{AuthApi, CollectionApi, RawApi, RawResponse};
use super::models::{AuthToken, Collection, LoginRequest, RecordId, RemoteRecord};
use crate::error::{ApiError, Result};

/// Client bound to one service base URL.
///
/// Without a token it sends unauthenticated requests; [`with_token`]
/// attaches `Authorization: Bearer <token>` to every request after that.
/// The underlying connection pool is released when the client is dropped.
///
/// [`with_token`]: ServiceClient::with_token
pub struct ServiceClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl ServiceClient {
    /// Create an unauthenticated client for `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("huntseed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token to all subsequent requests
    pub fn with_token(mut self, token: AuthToken) -> Self {
        self.token = Some(token.token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Send a request and hand back the response regardless of status
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Response> {
        let url = self.url(path);
        log::debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        log::debug!("{} {} -> {}", method, url, response.status());
        Ok(response)
    }

    /// Send a request, failing on any non-2xx status
    async fn send_checked(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response> {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("").to_string());
        Err(ApiError::Http {
            status: status.as_u16(),
            body,
        }
        .into())
    }

    /// Send a request and parse the 2xx body as JSON
    async fn request_json(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let response = self.send_checked(method, path, body).await?;
        let data = response.json::<Value>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }
}

#[async_trait]
impl AuthApi for ServiceClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthToken> {
        let login = serde_json::to_value(LoginRequest { email, password })?;
        let mut body = self.request_json(Method::POST, "/login", Some(&login)).await?;

        let auth = body.get_mut("auth").map(Value::take).ok_or_else(|| {
            ApiError::InvalidResponse("Login response is missing the 'auth' key".to_string())
        })?;
        let token: AuthToken = serde_json::from_value(auth).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })?;

        if token.token.is_empty() {
            return Err(ApiError::InvalidResponse("Login returned an empty token".to_string()).into());
        }

        if let Some(expires_at) = token.expires_at {
            log::debug!("Token expires at {}", expires_at.to_rfc3339());
        }
        Ok(token)
    }
}

#[async_trait]
impl CollectionApi for ServiceClient {
    async fn list(&self, collection: Collection) -> Result<Vec<RemoteRecord>> {
        let body = self
            .request_json(Method::GET, &collection.path(), None)
            .await?;
        Ok(RemoteRecord::from_listing(collection, body)?)
    }

    async fn create(&self, collection: Collection, body: &Value) -> Result<RemoteRecord> {
        let created = self
            .request_json(Method::POST, &collection.path(), Some(body))
            .await?;
        Ok(RemoteRecord::from_created(collection, created)?)
    }

    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<()> {
        self.send_checked(Method::DELETE, &collection.record_path(id), None)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl RawApi for ServiceClient {
    async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse> {
        let response = self.send(method, path, body).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::from)?;
        Ok(RawResponse { status, body })
    }
}
