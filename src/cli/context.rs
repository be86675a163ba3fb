//! Command execution context
//!
//! Merges global flags with the config file and hands out clients bound to
//! the resolved base URL.

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{AuthApi, ServiceClient};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
    base_url: String,
    email: Option<String>,
    password: Option<String>,
    fixtures: Option<PathBuf>,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config file (explicit path or default location) and
    /// resolves the base URL. Credentials are resolved lazily so commands
    /// that never log in do not require them.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let base_url = config.resolve_base_url(opts.base_url_ref())?;
        log::debug!("Using base URL {}", base_url);

        Ok(Self {
            config,
            format: opts.format,
            base_url,
            email: opts.email.clone(),
            password: opts.password.clone(),
            fixtures: opts.fixtures.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fixture file to load, `None` for the built-in set
    pub fn fixtures_path(&self) -> Option<PathBuf> {
        self.config.resolve_fixtures(self.fixtures.as_deref())
    }

    /// Client without credentials
    pub fn anonymous_client(&self) -> Result<ServiceClient> {
        ServiceClient::new(&self.base_url)
    }

    /// Log in and return a client that sends the bearer token on every request
    pub async fn authenticated_client(&self) -> Result<ServiceClient> {
        let credentials = self
            .config
            .resolve_credentials(self.email.as_deref(), self.password.as_deref())?;

        let client = ServiceClient::new(&self.base_url)?;
        log::info!("Authenticating as {}", credentials.email);
        let token = client
            .authenticate(&credentials.email, &credentials.password)
            .await?;
        eprintln!("{} Logged in as {}", "✓".green(), credentials.email.bold());

        Ok(client.with_token(token))
    }

    /// Authenticated client when `auth` is set, anonymous otherwise
    pub async fn client(&self, auth: bool) -> Result<ServiceClient> {
        if auth {
            self.authenticated_client().await
        } else {
            self.anonymous_client()
        }
    }
}
