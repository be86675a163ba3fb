//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;
use reqwest::Method;
use serde_json::Value;

pub mod args;
pub mod context;
pub mod dump;
pub mod explore;
pub mod fixtures;
pub mod reset;
pub mod seed;
pub mod shell;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::client::Collection;

/// huntseed - seed, reset and inspect test data in a running job-hunt API
#[derive(Parser, Debug)]
#[command(name = "huntseed")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Service base URL [default: http://localhost:4000/v1]
    #[arg(long, global = true, env = "HUNTSEED_BASE_URL", hide_env = true)]
    pub base_url: Option<String>,

    /// Login email for authenticated commands
    #[arg(long, global = true, env = "HUNTSEED_EMAIL", hide_env = true)]
    pub email: Option<String>,

    /// Login password for authenticated commands
    #[arg(
        long,
        global = true,
        env = "HUNTSEED_PASSWORD",
        hide_env = true,
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// YAML fixture file to seed instead of the built-in set
    #[arg(long, global = true, env = "HUNTSEED_FIXTURES", hide_env = true)]
    pub fixtures: Option<PathBuf>,

    /// Override config file location
    #[arg(long, global = true, env = "HUNTSEED_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "HUNTSEED_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true, env = "HUNTSEED_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Wipe each collection and insert the fixtures, then open a shell
    Seed(SeedArgs),

    /// Delete every record in the collections without reseeding
    Reset {
        /// Only reset this collection
        #[arg(long, value_enum)]
        only: Option<Collection>,
    },

    /// List the records in a collection
    Dump {
        /// Collection to list
        #[arg(value_enum, default_value = "companies")]
        collection: Collection,

        /// Log in before listing
        #[arg(long)]
        auth: bool,
    },

    /// Send one raw request and print the response
    #[command(after_help = "\
Examples:
  huntseed explore GET /companies
  huntseed explore POST /companies '{\"name\":\"Acme\",\"url\":\"https://acme.test\",\"tech_stack\":[\"Rust\"]}' --auth
  huntseed explore DELETE /companies/7 --auth")]
    Explore {
        /// HTTP method
        #[arg(value_parser = args::parse_method)]
        method: Method,

        /// Path relative to the base URL, e.g. /companies/7
        path: String,

        /// JSON request body
        #[arg(value_parser = args::parse_json_body)]
        body: Option<Value>,

        /// Log in and send the request with the bearer token
        #[arg(long)]
        auth: bool,
    },

    /// Open the interactive request shell
    Shell {
        /// Log in and send requests with the bearer token
        #[arg(long)]
        auth: bool,
    },

    /// Print the fixture set that `seed` would insert
    Fixtures,

    /// Generate shell completions
    #[command(after_help = "\
  bash:   huntseed completion bash > /etc/bash_completion.d/huntseed
  zsh:    huntseed completion zsh > \"${fpath[1]}/_huntseed\"
  fish:   huntseed completion fish > ~/.config/fish/completions/huntseed.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `seed`
#[derive(Debug, Clone, Args, Default)]
pub struct SeedArgs {
    /// Only seed this collection
    #[arg(long, value_enum)]
    pub only: Option<Collection>,

    /// Re-list each collection afterwards and fail unless it holds exactly the fixtures
    #[arg(long)]
    pub verify: bool,

    /// Exit instead of opening the interactive shell
    #[arg(long)]
    pub no_shell: bool,
}
