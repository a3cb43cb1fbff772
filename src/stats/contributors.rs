//! Contributors with merged pull requests

use super::MergedPrCounts;
use gitstat_github::{AccountType, Contributor};
use serde::Serialize;

/// A contributor joined with their merged pull request count
///
/// Only contributors with at least one merged pull request are represented.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveContributor {
    pub username: String,
    pub avatar: String,
    pub contributions: u64,
    #[serde(rename = "mergedPRs")]
    pub merged_prs: u64,
    pub github_url: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Keep contributors with merged pull requests, most merged first
///
/// Authors of merged pull requests who are not in `contributors` do not
/// appear. Contributors with equal counts keep their upstream order.
pub fn active_contributors(
    contributors: &[Contributor],
    counts: &MergedPrCounts,
) -> Vec<ActiveContributor> {
    let mut active: Vec<ActiveContributor> = contributors
        .iter()
        .filter_map(|c| {
            let merged_prs = counts.get(&c.login);
            (merged_prs > 0).then(|| ActiveContributor {
                username: c.login.clone(),
                avatar: c.avatar_url.clone(),
                contributions: c.contributions,
                merged_prs,
                github_url: c.html_url.clone(),
                account_type: c.account_type,
            })
        })
        .collect();

    // sort_by is stable
    active.sort_by(|a, b| b.merged_prs.cmp(&a.merged_prs));
    active
}
