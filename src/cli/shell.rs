//! Interactive request shell
//!
//! A prompt loop for poking at the service by hand after a run. Each line is
//! `METHOD PATH [JSON BODY]`. Failures are printed and the loop continues.

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};
use reqwest::Method;
use serde_json::Value;

use crate::cli::args::{parse_json_body, parse_method};
use crate::cli::{CommandContext, GlobalOptions, explore};
use crate::client::RawApi;
use crate::error::Result;

const HELP: &str = "\
Enter requests as METHOD PATH [JSON BODY], relative to the base URL:
  GET /companies
  POST /users {\"name\": \"Maude\", \"email\": \"mauddie@avant-guard.com\", \"password\": \"goodmanandthorough\"}
  DELETE /companies/7
Type `help` for this message, `exit` or `quit` to leave.";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Request {
        method: Method,
        path: String,
        body: Option<Value>,
    },
    Help,
    Exit,
    Empty,
}

/// Parse a shell line
pub fn parse_line(line: &str) -> std::result::Result<ShellCommand, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellCommand::Empty);
    }

    let mut parts = line.splitn(3, char::is_whitespace);
    let head = parts.next().unwrap_or_default();
    match head.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(ShellCommand::Help),
        "exit" | "quit" => return Ok(ShellCommand::Exit),
        _ => {}
    }

    let method = parse_method(head)?;
    let path = parts
        .next()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| format!("missing path after {}", method))?;
    let body = match parts.next().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(parse_json_body(raw)?),
        _ => None,
    };

    Ok(ShellCommand::Request {
        method,
        path: path.to_string(),
        body,
    })
}

/// Run the shell command
pub async fn run(opts: &GlobalOptions, auth: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client(auth).await?;
    interact(&client, ctx.base_url()).await
}

/// Prompt for requests until the operator leaves.
pub async fn interact<C>(client: &C, base_url: &str) -> Result<()>
where
    C: RawApi + ?Sized,
{
    println!("{} {}", "Interactive shell for".bold(), base_url.cyan());
    println!("{}\n", HELP.dimmed());

    let theme = ColorfulTheme::default();
    loop {
        let line = match Input::<String>::with_theme(&theme)
            .with_prompt("huntseed")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(err) => {
                // EOF or a closed terminal ends the session
                log::debug!("Shell input ended: {}", err);
                break;
            }
        };

        match parse_line(&line) {
            Ok(ShellCommand::Empty) => continue,
            Ok(ShellCommand::Help) => println!("{}", HELP),
            Ok(ShellCommand::Exit) => break,
            Ok(ShellCommand::Request { method, path, body }) => {
                match explore::send(client, method, &path, body.as_ref()).await {
                    Ok(response) => explore::print_response(&response),
                    Err(err) => eprintln!("{} {}", "Error:".red().bold(), err),
                }
            }
            Err(msg) => eprintln!("{} {}", "Error:".red().bold(), msg),
        }
    }

    Ok(())
}
