//! Pull request operations

use crate::client::GitHubClient;
use crate::pagination::{PageLimits, fetch_all_pages};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub login: String,
}

/// The subset of a pull request payload the statistics need
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PullRequest {
    #[serde(default)]
    pub number: u64,
    /// `null` for pull requests whose author account was deleted
    pub user: Option<User>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub fn new(number: u64, author: Option<&str>, merged_at: Option<DateTime<Utc>>) -> Self {
        Self {
            number,
            user: author.map(|login| User {
                login: login.to_string(),
            }),
            merged_at,
        }
    }

    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }

    /// Closed pull requests are either merged or rejected; only `merged_at` tells them apart
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

impl GitHubClient {
    /// List every closed pull request of a repository, merged or not
    ///
    /// # Errors
    /// Fails if any page request fails, returns a malformed payload, or the
    /// collection exceeds `limits`.
    pub async fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        limits: &PageLimits,
    ) -> Result<Vec<PullRequest>> {
        let endpoint = self.repo_endpoint(owner, repo, "pulls?state=closed");
        fetch_all_pages(self, &endpoint, limits).await
    }
}
