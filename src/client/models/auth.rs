//! Authentication models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Bearer token returned by the login endpoint.
///
/// Lives for one run only; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    /// Opaque token string
    pub token: String,

    /// Token expiration time, when the service reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_with_expiry() {
        let token: AuthToken = serde_json::from_str(
            r#"{"token": "X3ZQ7KJ2MNB4RTY6UP5WLC8HDA", "expires_at": "2026-10-20T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(token.token, "X3ZQ7KJ2MNB4RTY6UP5WLC8HDA");
        assert!(token.expires_at.is_some());
    }

    #[test]
    fn test_auth_token_without_expiry() {
        let token: AuthToken = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(token.token, "abc");
        assert!(token.expires_at.is_none());
    }

    #[test]
    fn test_login_request_body() {
        let body = serde_json::to_value(LoginRequest {
            email: "admin@example.com",
            password: "secret",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "admin@example.com", "password": "secret"})
        );
    }
}
