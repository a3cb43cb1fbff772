//! Fetch-and-aggregate pipeline
//!
//! URL → owner/name → both collections fetched concurrently → aggregation
//! → response. Aggregation starts only once both collections are complete,
//! and a failure of either fetch fails the whole analysis.

use crate::config::Config;
use crate::error::{StatsError, StatsResult};
use crate::report::{AnalyzeRequest, AnalyzeResponse};
use crate::stats;
use chrono::Utc;
use gitstat_github::{GitHubClient, PageLimits, parse_github_url};
use tracing::{debug, info};

/// Runs analyses against one upstream API with fixed pagination bounds
#[derive(Clone)]
pub struct Analyzer {
    client: GitHubClient,
    limits: PageLimits,
}

impl Analyzer {
    pub fn new(client: GitHubClient, limits: PageLimits) -> Self {
        Self { client, limits }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.github_client(None), config.page_limits())
    }

    /// Analyze the repository named by `request.url`
    ///
    /// A non-blank `request.token` replaces the configured credential for
    /// this request only.
    ///
    /// # Errors
    /// - [`StatsError::InvalidUrl`] before any network call when the URL has
    ///   no owner/name pair
    /// - [`StatsError::UpstreamFetch`] when any page of either collection fails
    pub async fn analyze(&self, request: &AnalyzeRequest) -> StatsResult<AnalyzeResponse> {
        let (owner, repo) = parse_github_url(&request.url)
            .map_err(|_| StatsError::InvalidUrl(request.url.clone()))?;

        let client = match request.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => {
                self.client.clone().with_token(Some(token.to_string()))
            }
            _ => self.client.clone(),
        };

        info!(
            owner = %owner,
            repo = %repo,
            authenticated = client.is_authenticated(),
            "Analyzing repository"
        );

        let (contributors, pull_requests) = futures::try_join!(
            async {
                client
                    .list_contributors(&owner, &repo, &self.limits)
                    .await
                    .map_err(|e| StatsError::upstream("contributors", e))
            },
            async {
                client
                    .list_closed_pull_requests(&owner, &repo, &self.limits)
                    .await
                    .map_err(|e| StatsError::upstream("pull requests", e))
            },
        )?;

        debug!(
            contributors = contributors.len(),
            pull_requests = pull_requests.len(),
            "Collections fetched"
        );

        let analysis = stats::analyze(&owner, &repo, &contributors, &pull_requests, Utc::now());

        info!(
            owner = %owner,
            repo = %repo,
            active_contributors = analysis.contributors.len(),
            merged_prs = analysis.author_stats.total_merged_prs,
            "Analysis complete"
        );

        Ok(AnalyzeResponse::new(analysis, pull_requests.len()))
    }
}
