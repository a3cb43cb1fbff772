//! Request and response value objects
//!
//! These are the only shapes that cross the library boundary. The CLI and
//! the HTTP server both read an [`AnalyzeRequest`] and emit either an
//! [`AnalyzeResponse`] or an [`ErrorResponse`].

use crate::charts::ChartData;
use crate::constants::response::{API_VERSION, FILTER_NOTE, GENERIC_ERROR};
use crate::error::StatsError;
use crate::stats::{ActiveContributor, Analysis, AuthorStats, RepoStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RequestDocument")]
pub struct AnalyzeRequest {
    /// Repository URL, e.g. `https://github.com/owner/repo`
    pub url: String,
    /// Credential forwarded to the upstream API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Wire form of a request; the credential may arrive under several keys
#[derive(Deserialize)]
struct RequestDocument {
    url: String,
    #[serde(default, rename = "GITHUB_TOKEN")]
    github_token: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default, rename = "githubToken")]
    camel_token: Option<String>,
}

impl From<RequestDocument> for AnalyzeRequest {
    /// `GITHUB_TOKEN` wins, then `token`, then `githubToken`; blank values are skipped
    fn from(doc: RequestDocument) -> Self {
        let token = [doc.github_token, doc.token, doc.camel_token]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty());
        Self { url: doc.url, token }
    }
}

impl AnalyzeRequest {
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            url: url.into(),
            token,
        }
    }

    /// Parse a request document
    pub fn from_json(json: &str) -> Result<Self, StatsError> {
        serde_json::from_str(json).map_err(|e| StatsError::InvalidRequest(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoints {
    pub contributors: usize,
    pub pull_requests: usize,
    #[serde(rename = "mergedPRs")]
    pub merged_prs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub api_version: &'static str,
    pub data_points: DataPoints,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub repo_stats: RepoStats,
    pub author_stats: AuthorStats,
    pub contributors: Vec<ActiveContributor>,
    pub charts: ChartData,
    pub metadata: Metadata,
}

impl AnalyzeResponse {
    /// Assemble the response for one analysis
    ///
    /// `pull_requests` is the number of closed pull requests fetched, merged or not.
    pub fn new(analysis: Analysis, pull_requests: usize) -> Self {
        let charts = ChartData::build(&analysis.contributors, &analysis.author_stats);
        let metadata = Metadata {
            api_version: API_VERSION,
            data_points: DataPoints {
                contributors: analysis.contributors.len(),
                pull_requests,
                merged_prs: analysis.author_stats.total_merged_prs,
            },
            note: FILTER_NOTE,
        };

        Self {
            success: true,
            timestamp: analysis.repo_stats.last_updated,
            repo_stats: analysis.repo_stats,
            author_stats: analysis.author_stats,
            contributors: analysis.contributors,
            charts,
            metadata,
        }
    }
}

/// The single failure shape; the kind of failure is only visible in `details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            success: false,
            error: GENERIC_ERROR.to_string(),
            details: details.into(),
            timestamp: Utc::now(),
        }
    }
}

impl From<&StatsError> for ErrorResponse {
    fn from(err: &StatsError) -> Self {
        Self::new(err.to_string())
    }
}
