//! Explore command: one raw request against the service

use colored::Colorize;
use reqwest::Method;
use serde_json::Value;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::{RawApi, RawResponse};
use crate::error::Result;

/// Run the explore command
pub async fn run(
    opts: &GlobalOptions,
    method: Method,
    path: &str,
    body: Option<&Value>,
    auth: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client(auth).await?;

    let response = send(&client, method, path, body).await?;
    print_response(&response);
    Ok(())
}

/// Send a raw request; a leading slash is added to `path` when missing
pub async fn send<C>(
    client: &C,
    method: Method,
    path: &str,
    body: Option<&Value>,
) -> Result<RawResponse>
where
    C: RawApi + ?Sized,
{
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    client.send_raw(method, &path, body).await
}

/// Print the status line to stderr and the body to stdout
pub fn print_response(response: &RawResponse) {
    let status = format!("HTTP {}", response.status);
    if response.is_success() {
        eprintln!("{}", status.green().bold());
    } else {
        eprintln!("{}", status.red().bold());
    }

    if !response.body.is_empty() {
        println!("{}", response.pretty_body());
    }
}
