//! Common CLI types shared across commands

use reqwest::Method;
use serde_json::Value;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per record (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Parse an HTTP method name, case-insensitively
pub fn parse_method(s: &str) -> Result<Method, String> {
    match s.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        "HEAD" => Ok(Method::HEAD),
        "OPTIONS" => Ok(Method::OPTIONS),
        _ => Err(format!(
            "unsupported HTTP method '{}' (expected GET, POST, PUT, PATCH, DELETE, HEAD or OPTIONS)",
            s
        )),
    }
}

/// Parse a request body given on the command line as JSON
pub fn parse_json_body(s: &str) -> Result<Value, String> {
    serde_json::from_str(s).map_err(|e| format!("body is not valid JSON: {}", e))
}
