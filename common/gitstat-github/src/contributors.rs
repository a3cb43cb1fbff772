//! Contributor listing

use crate::client::GitHubClient;
use crate::pagination::{PageLimits, fetch_all_pages};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Kind of GitHub account behind a contributor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    #[default]
    User,
    Organization,
    Bot,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AccountType::User => "User",
            AccountType::Organization => "Organization",
            AccountType::Bot => "Bot",
        };
        f.write_str(name)
    }
}

/// One entry of `GET /repos/{owner}/{repo}/contributors`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(rename = "type", default)]
    pub account_type: AccountType,
}

impl Contributor {
    pub fn new(login: impl Into<String>, contributions: u64) -> Self {
        let login = login.into();
        Self {
            avatar_url: format!("https://avatars.githubusercontent.com/{}", login),
            html_url: format!("https://github.com/{}", login),
            login,
            contributions,
            account_type: AccountType::User,
        }
    }
}

impl GitHubClient {
    /// List every contributor of a repository
    ///
    /// # Errors
    /// Fails if any page request fails, returns a malformed payload, or the
    /// collection exceeds `limits`.
    pub async fn list_contributors(
        &self,
        owner: &str,
        repo: &str,
        limits: &PageLimits,
    ) -> Result<Vec<Contributor>> {
        let endpoint = self.repo_endpoint(owner, repo, "contributors");
        fetch_all_pages(self, &endpoint, limits).await
    }
}
