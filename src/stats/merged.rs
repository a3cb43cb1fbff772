//! Merged pull request counts per author

use gitstat_github::PullRequest;
use std::collections::HashMap;

/// Author login → number of merged pull requests they authored
///
/// Built in one pass. Only pull requests with both a merge timestamp and an
/// author are counted, so `total()` always equals the sum of all entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedPrCounts {
    counts: HashMap<String, u64>,
    total: u64,
}

impl MergedPrCounts {
    pub fn from_pull_requests<'a, I>(pull_requests: I) -> Self
    where
        I: IntoIterator<Item = &'a PullRequest>,
    {
        let mut merged = Self::default();
        for pr in pull_requests {
            if !pr.is_merged() {
                continue;
            }
            if let Some(author) = pr.author() {
                *merged.counts.entry(author.to_string()).or_insert(0) += 1;
                merged.total += 1;
            }
        }
        merged
    }

    /// Merged pull requests by `login`, 0 when they have none
    pub fn get(&self, login: &str) -> u64 {
        self.counts.get(login).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Distinct authors with at least one merged pull request
    pub fn author_count(&self) -> usize {
        self.counts.len()
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(login, count)| (login.as_str(), *count))
    }
}
