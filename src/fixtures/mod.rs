//! Fixture records seeded into the service
//!
//! The built-in set is the known test state the service is reset to. A YAML
//! file with the same shape can replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{Collection, RemoteRecord};
use crate::error::{FixtureError, Result};

/// A record that can be inserted into a collection and later recognized there.
pub trait Fixture: Serialize + Send + Sync {
    /// Collection the fixture belongs to
    const COLLECTION: Collection;

    /// Human-readable label for logging
    fn label(&self) -> &str;

    /// Whether a remote record holds this fixture's data (ignoring `id` and
    /// anything the service adds or never echoes back)
    fn matches(&self, record: &RemoteRecord) -> bool;
}

/// Company fixture: `{name, url, tech_stack}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFixture {
    pub name: String,
    pub url: String,
    pub tech_stack: Vec<String>,
}

impl CompanyFixture {
    pub fn new(name: &str, url: &str, tech_stack: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            tech_stack: tech_stack.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Fixture for CompanyFixture {
    const COLLECTION: Collection = Collection::Companies;

    fn label(&self) -> &str {
        &self.name
    }

    fn matches(&self, record: &RemoteRecord) -> bool {
        let tech_stack: Vec<Value> = self
            .tech_stack
            .iter()
            .map(|t| Value::String(t.clone()))
            .collect();

        record.name == self.name
            && record.field("url").and_then(Value::as_str) == Some(self.url.as_str())
            && record.field("tech_stack").and_then(Value::as_array) == Some(&tech_stack)
    }
}

/// User fixture: `{name, email, password}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFixture {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserFixture {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl Fixture for UserFixture {
    const COLLECTION: Collection = Collection::Users;

    fn label(&self) -> &str {
        &self.name
    }

    // The service never returns passwords
    fn matches(&self, record: &RemoteRecord) -> bool {
        record.name == self.name
            && record.field("email").and_then(Value::as_str) == Some(self.email.as_str())
    }
}

/// Everything seeded by one run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixtureSet {
    #[serde(default)]
    pub companies: Vec<CompanyFixture>,

    #[serde(default)]
    pub users: Vec<UserFixture>,
}

impl FixtureSet {
    /// The built-in fixture set
    pub fn builtin() -> Self {
        Self {
            companies: vec![
                CompanyFixture::new(
                    "Close",
                    "https://close.com",
                    &["Python", "PostgreSQL", "Kubernetes"],
                ),
                CompanyFixture::new("Clever", "https://clever.com", &["Go", "Kubernetes"]),
                CompanyFixture::new(
                    "iSpotTV",
                    "https://ispot.com",
                    &["Java", "Mysql", "Kubernetes"],
                ),
                CompanyFixture::new(
                    "Canonical",
                    "https://canonical.org",
                    &["Python", "Go", "Kubernetes"],
                ),
            ],
            users: vec![
                UserFixture::new("The Dude", "the.dude@abides.com", "thedudeabides"),
                UserFixture::new(
                    "Walter Sobchak",
                    "walter@sobchak-security.com",
                    "vietnamvet",
                ),
                UserFixture::new("Donnie", "donniesurfs@yahoo.com", "iamthewalrus"),
                UserFixture::new("Maude", "mauddie@avant-guard.com", "goodmanandthorough"),
            ],
        }
    }

    /// Load fixtures from a YAML file, or the built-in set when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Load fixtures from a YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(FixtureError::NotFound(display).into());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| FixtureError::Unreadable {
            path: display.clone(),
            reason: e.to_string(),
        })?;
        let set: FixtureSet =
            serde_yaml::from_str(&contents).map_err(|e| FixtureError::ParseError {
                path: display.clone(),
                reason: e.to_string(),
            })?;

        log::debug!(
            "Loaded {} companies and {} users from {}",
            set.companies.len(),
            set.users.len(),
            display
        );
        Ok(set)
    }

    /// Render the set as YAML
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
