//! Raw request API trait

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::Result;

/// Status and body of a raw request, whatever the status
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body pretty-printed when it is JSON, verbatim otherwise
    pub fn pretty_body(&self) -> String {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| self.body.clone()),
            Err(_) => self.body.clone(),
        }
    }
}

/// Free-form requests used by `explore` and the interactive shell.
///
/// Unlike [`CollectionApi`](super::CollectionApi), a non-2xx status is
/// returned to the caller rather than raised.
#[async_trait]
pub trait RawApi: Send + Sync {
    async fn send_raw(&self, method: Method, path: &str, body: Option<&Value>)
    -> Result<RawResponse>;
}
