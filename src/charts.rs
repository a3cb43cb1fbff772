//! Chart-ready series derived from the statistics
//!
//! Renderers consume these series as-is; every selection and ordering
//! decision is made here.

use crate::constants::charts::{ACTIVITY_ENTRIES, ELLIPSIS, NAME_MAX_CHARS, TOP_CONTRIBUTORS};
use crate::stats::{ActiveContributor, AuthorStats, PrTier};
use serde::Serialize;

/// One bar of the top contributors chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorBar {
    /// Display name, truncated for the axis
    pub name: String,
    pub contributions: u64,
    #[serde(rename = "mergedPRs")]
    pub merged_prs: u64,
    /// Full username
    pub username: String,
}

/// One slice of the tier distribution chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: usize,
}

/// One point of the activity chart
///
/// `label` is a sequential placeholder ("Contributor 1", "Contributor 2", …)
/// over the most active contributors of this snapshot. It is not a time
/// axis; no historical data exists behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityPoint {
    pub label: String,
    pub contributions: u64,
    pub prs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub top_contributors: Vec<ContributorBar>,
    pub pr_distribution: Vec<DistributionSlice>,
    pub activity_trend: Vec<ActivityPoint>,
}

impl ChartData {
    /// `active` must already be sorted by merged pull requests, most first
    pub fn build(active: &[ActiveContributor], authors: &AuthorStats) -> Self {
        Self {
            top_contributors: top_contributors(active),
            pr_distribution: pr_distribution(authors),
            activity_trend: activity_trend(active),
        }
    }
}

pub fn top_contributors(active: &[ActiveContributor]) -> Vec<ContributorBar> {
    active
        .iter()
        .take(TOP_CONTRIBUTORS)
        .map(|c| ContributorBar {
            name: display_name(&c.username),
            contributions: c.contributions,
            merged_prs: c.merged_prs,
            username: c.username.clone(),
        })
        .collect()
}

pub fn pr_distribution(authors: &AuthorStats) -> Vec<DistributionSlice> {
    PrTier::ALL
        .iter()
        .map(|tier| DistributionSlice {
            name: tier.label(),
            value: authors.pr_distribution.get(*tier),
        })
        .collect()
}

pub fn activity_trend(active: &[ActiveContributor]) -> Vec<ActivityPoint> {
    active
        .iter()
        .take(ACTIVITY_ENTRIES)
        .enumerate()
        .map(|(index, c)| ActivityPoint {
            label: format!("Contributor {}", index + 1),
            contributions: c.contributions,
            prs: c.merged_prs,
        })
        .collect()
}

/// Truncate to [`NAME_MAX_CHARS`] characters, marking the cut with an ellipsis
pub fn display_name(username: &str) -> String {
    if username.chars().count() > NAME_MAX_CHARS {
        let head: String = username.chars().take(NAME_MAX_CHARS).collect();
        format!("{}{}", head, ELLIPSIS)
    } else {
        username.to_string()
    }
}
