//! Configuration management for huntseed

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/v1";

/// Application configuration, read from `~/.huntseed/config.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Service base URL, including the API version prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Login email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Login password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Fixture file to use instead of the built-in set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<PathBuf>,
}

/// Login credentials resolved from flags, environment, or config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".huntseed").join("config.yaml"))
    }

    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing file at the default location yields an empty config; a
    /// missing file at an explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    log::debug!("No config file at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        // An empty file deserializes to null
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the base URL: override, then config file, then default.
    ///
    /// Trailing slashes are stripped so paths can be appended verbatim.
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> Result<String> {
        let url = cli_override
            .or(self.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base URL must start with http:// or https://, got '{}'",
                url
            ))
            .into());
        }

        Ok(url)
    }

    /// Resolve login credentials, overrides first.
    pub fn resolve_credentials(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Credentials> {
        let email = email.or(self.email.as_deref());
        let password = password.or(self.password.as_deref());

        match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() => Ok(Credentials {
                email: email.to_string(),
                password: password.to_string(),
            }),
            _ => Err(ConfigError::MissingCredentials.into()),
        }
    }

    /// Resolve the fixture file, override first. `None` means the built-in set.
    pub fn resolve_fixtures(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.fixtures.clone())
    }
}
