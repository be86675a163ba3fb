//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::AuthToken;
use crate::error::Result;

/// Authentication operations for the service
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange an email and password for a bearer token
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthToken>;
}
