//! Repository-level statistics

use crate::constants;
use chrono::{DateTime, Utc};
use gitstat_github::Contributor;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoStats {
    /// Every contributor the upstream reported
    pub total_contributors: usize,
    /// Contributors with at least one merged pull request
    pub active_contributors: usize,
    pub total_contributions: u64,
    /// Rounded to two decimals
    pub avg_contributions_per_user: f64,
    /// Login of the contributor with the most contributions
    pub top_contributor: Option<String>,
    pub repo_url: String,
    pub owner: String,
    pub repo_name: String,
    pub last_updated: DateTime<Utc>,
}

impl RepoStats {
    pub fn compute(
        owner: &str,
        repo: &str,
        contributors: &[Contributor],
        active_contributors: usize,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let total_contributions: u64 = contributors.iter().map(|c| c.contributions).sum();
        let average = if contributors.is_empty() {
            0.0
        } else {
            total_contributions as f64 / contributors.len() as f64
        };

        Self {
            total_contributors: contributors.len(),
            active_contributors,
            total_contributions,
            avg_contributions_per_user: round_to_cents(average),
            top_contributor: top_contributor(contributors).map(|c| c.login.clone()),
            repo_url: format!("{}/{}/{}", constants::github::WEB_BASE, owner, repo),
            owner: owner.to_string(),
            repo_name: repo.to_string(),
            last_updated: generated_at,
        }
    }
}

/// The contributor with the most contributions; the earliest one wins a tie
pub fn top_contributor(contributors: &[Contributor]) -> Option<&Contributor> {
    // Iterator::max_by_key keeps the last maximum, hence the explicit fold
    contributors.iter().fold(None, |best, c| match best {
        Some(b) if c.contributions <= b.contributions => Some(b),
        _ => Some(c),
    })
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
