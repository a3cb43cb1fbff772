//! GitHub client implementation

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::pagination::PageSource;

/// Public GitHub REST API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// User-Agent sent with every request; GitHub rejects requests without one
pub const DEFAULT_USER_AGENT: &str = concat!("gitstat/", env!("CARGO_PKG_VERSION"));

/// GitHub API client for making optionally authenticated requests
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection
/// pool, so a long-lived client can be cloned per request with a different
/// credential via [`GitHubClient::with_token`].
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
    pub(crate) api_base: String,
}

impl GitHubClient {
    /// Create a new GitHub client with an optional token
    ///
    /// The token is forwarded as-is; no environment lookup happens here.
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.filter(|t| !t.trim().is_empty()),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API root (GitHub Enterprise, test servers)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the credential, keeping the connection pool and API root
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Check if the client has authentication configured
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The API root requests are sent to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build the URL of a repository-scoped collection, e.g. `contributors`
    pub(crate) fn repo_endpoint(&self, owner: &str, repo: &str, collection: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_base, owner, repo, collection)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl PageSource for GitHubClient {
    async fn fetch_page(&self, endpoint: &str, page: u32, per_page: u32) -> Result<Vec<Value>> {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        let url = format!("{endpoint}{separator}per_page={per_page}&page={page}");

        let mut request = self
            .client
            .get(&url)
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        // Empty repositories answer the contributors endpoint with 204 and no body
        if status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!(
                "GitHub API error ({} {}) for {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                url,
                error_text
            ));
        }

        let items: Vec<Value> = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse page {} of {}: {}", page, endpoint, e))?;
        Ok(items)
    }
}
