//! Configuration file loading and saving

use super::validation;
use crate::constants;
use anyhow::{Context, Result};
use gitstat_github::{GitHubClient, PageLimits};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubSettings {
    /// API root, e.g. `https://api.github.com` or a GitHub Enterprise `/api/v3` URL
    pub api_base: String,
    /// Credential used when a request does not bring its own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base: constants::github::API_BASE.to_string(),
            token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
    pub per_page: u32,
    pub max_pages: u32,
    pub max_items: usize,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            per_page: constants::pagination::PER_PAGE,
            max_pages: constants::pagination::MAX_PAGES,
            max_items: constants::pagination::MAX_ITEMS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: constants::config::DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github: GitHubSettings,
    pub pagination: PaginationSettings,
    pub server: ServerSettings,
}

impl Config {
    /// Create a configuration holding the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    ///
    /// The token falls back to the `GITHUB_TOKEN` environment variable when the
    /// file does not set one.
    pub fn load_or_default(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::load(path)?
        } else {
            debug!(path, "Config file not found, using defaults");
            Self::new()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Fill unset values from the process environment
    pub fn apply_env_overrides(&mut self) {
        if self.github.token.is_none() {
            self.github.token = std::env::var(constants::github::TOKEN_ENV_VAR)
                .ok()
                .filter(|t| !t.trim().is_empty());
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))
            .with_context(|| format!("Failed to write config file {}", path))?;
        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self).map_err(validation::validation_errors_to_anyhow)
    }

    /// Pagination bounds for one collection fetch
    pub fn page_limits(&self) -> PageLimits {
        PageLimits::new(
            self.pagination.per_page,
            self.pagination.max_pages,
            self.pagination.max_items,
        )
    }

    /// GitHub client for the configured API root; `token` wins over the configured one
    pub fn github_client(&self, token: Option<String>) -> GitHubClient {
        GitHubClient::new(token.or_else(|| self.github.token.clone()))
            .with_api_base(self.github.api_base.clone())
    }

    /// Parsed server bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.server.bind))
    }
}
