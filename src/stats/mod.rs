//! Aggregation of contributors and closed pull requests
//!
//! The two fetched collections are combined into:
//!
//! - [`MergedPrCounts`]: merged pull requests per author login
//! - [`AuthorStats`]: author totals and the [`PrTier`] distribution
//! - [`RepoStats`]: contribution totals, average and top contributor
//! - [`ActiveContributor`]s: contributors with merged pull requests, most first
//!
//! Everything here is pure; the same inputs always give the same output
//! apart from the caller-supplied timestamp.

pub mod authors;
pub mod contributors;
pub mod merged;
pub mod repository;
pub mod tiers;

pub use authors::AuthorStats;
pub use contributors::{ActiveContributor, active_contributors};
pub use merged::MergedPrCounts;
pub use repository::{RepoStats, top_contributor};
pub use tiers::{PrDistribution, PrTier};

use chrono::{DateTime, Utc};
use gitstat_github::{Contributor, PullRequest};

/// Everything derived from one snapshot of a repository
#[derive(Debug, Clone)]
pub struct Analysis {
    pub merged_counts: MergedPrCounts,
    pub author_stats: AuthorStats,
    pub repo_stats: RepoStats,
    pub contributors: Vec<ActiveContributor>,
}

/// Aggregate both collections of `owner/repo`
pub fn analyze(
    owner: &str,
    repo: &str,
    contributors: &[Contributor],
    pull_requests: &[PullRequest],
    generated_at: DateTime<Utc>,
) -> Analysis {
    let merged_counts = MergedPrCounts::from_pull_requests(pull_requests);
    let active = active_contributors(contributors, &merged_counts);
    let author_stats = AuthorStats::from_counts(&merged_counts);
    let repo_stats = RepoStats::compute(owner, repo, contributors, active.len(), generated_at);

    Analysis {
        merged_counts,
        author_stats,
        repo_stats,
        contributors: active,
    }
}
