//! Global CLI options shared across all commands
//!
//! Collects the global flags once so command handlers take a single
//! argument instead of a growing parameter list.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// holds the flag/env layer; the config file is merged in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Service base URL override
    pub base_url: Option<String>,

    /// Login email override
    pub email: Option<String>,

    /// Login password override
    pub password: Option<String>,

    /// Custom config file path (defaults to ~/.huntseed/config.yaml)
    pub config: Option<String>,

    /// Fixture file override
    pub fixtures: Option<PathBuf>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            base_url: cli.base_url.clone(),
            email: cli.email.clone(),
            password: cli.password.clone(),
            config: cli.config.clone(),
            fixtures: cli.fixtures.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get base URL override as `Option<&str>`.
    pub fn base_url_ref(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}
