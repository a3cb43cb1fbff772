//! Author-level statistics

use super::{MergedPrCounts, PrDistribution};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStats {
    pub total_authors: usize,
    #[serde(rename = "totalMergedPRs")]
    pub total_merged_prs: u64,
    #[serde(rename = "authorsWithPRs")]
    pub authors_with_prs: usize,
    #[serde(rename = "avgPRsPerAuthor")]
    pub avg_prs_per_author: f64,
    pub pr_distribution: PrDistribution,
}

impl AuthorStats {
    pub fn from_counts(counts: &MergedPrCounts) -> Self {
        let authors = counts.author_count();
        // No authors divides by 1, yielding 0 rather than NaN
        let avg_prs_per_author = counts.total() as f64 / authors.max(1) as f64;

        Self {
            total_authors: authors,
            total_merged_prs: counts.total(),
            authors_with_prs: counts.iter().filter(|(_, count)| *count > 0).count(),
            avg_prs_per_author,
            pr_distribution: PrDistribution::from_counts(counts),
        }
    }
}
