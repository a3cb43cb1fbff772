//! Aggregation property tests over generated collections

use chrono::{TimeZone, Utc};
use gitstat::charts::ChartData;
use gitstat::stats::{MergedPrCounts, PrDistribution, analyze};
use gitstat_github::{Contributor, PullRequest};
use std::collections::HashSet;

/// Deterministic pseudo-random sequence so failures are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn generated_snapshot(seed: u64) -> (Vec<Contributor>, Vec<PullRequest>) {
    let mut rng = Lcg(seed);
    let logins: Vec<String> = (0..12).map(|i| format!("user{}", i)).collect();
    let when = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let contributors = logins
        .iter()
        .take(9)
        .map(|login| Contributor::new(login.as_str(), rng.next(500)))
        .collect();

    let pull_requests = (0..rng.next(120) + 1)
        .map(|number| {
            let author = match rng.next(8) {
                0 => None,
                _ => Some(logins[rng.next(logins.len() as u64) as usize].as_str()),
            };
            let merged_at = (rng.next(3) > 0).then_some(when);
            PullRequest::new(number, author, merged_at)
        })
        .collect();

    (contributors, pull_requests)
}

#[test]
fn test_total_merged_counts_merged_with_author() {
    for seed in 1..=50 {
        let (contributors, prs) = generated_snapshot(seed);
        let expected = prs
            .iter()
            .filter(|pr| pr.merged_at.is_some() && pr.author().is_some())
            .count() as u64;

        let analysis = analyze("o", "r", &contributors, &prs, Utc::now());
        assert_eq!(analysis.author_stats.total_merged_prs, expected, "seed {}", seed);
    }
}

#[test]
fn test_active_contributors_have_merged_prs_and_are_sorted() {
    for seed in 1..=50 {
        let (contributors, prs) = generated_snapshot(seed);
        let analysis = analyze("o", "r", &contributors, &prs, Utc::now());

        assert!(analysis.contributors.iter().all(|c| c.merged_prs >= 1));
        assert!(
            analysis
                .contributors
                .windows(2)
                .all(|w| w[0].merged_prs >= w[1].merged_prs),
            "seed {}",
            seed
        );
    }
}

#[test]
fn test_active_contributor_ties_keep_upstream_order() {
    let contributors = vec![
        Contributor::new("x", 1),
        Contributor::new("y", 2),
        Contributor::new("z", 3),
    ];
    let when = Some(Utc::now());
    let prs = vec![
        PullRequest::new(1, Some("z"), when),
        PullRequest::new(2, Some("y"), when),
        PullRequest::new(3, Some("x"), when),
    ];

    let analysis = analyze("o", "r", &contributors, &prs, Utc::now());
    let order: Vec<&str> = analysis
        .contributors
        .iter()
        .map(|c| c.username.as_str())
        .collect();
    assert_eq!(order, vec!["x", "y", "z"]);
}

#[test]
fn test_tiers_partition_distinct_authors() {
    for seed in 1..=50 {
        let (_, prs) = generated_snapshot(seed);
        let counts = MergedPrCounts::from_pull_requests(&prs);
        let distribution = PrDistribution::from_counts(&counts);

        let authors: HashSet<&str> = prs
            .iter()
            .filter(|pr| pr.is_merged())
            .filter_map(|pr| pr.author())
            .collect();

        assert_eq!(distribution.total(), authors.len(), "seed {}", seed);
        assert_eq!(
            distribution.novice + distribution.active + distribution.core + distribution.expert,
            counts.author_count()
        );
    }
}

#[test]
fn test_worked_example() {
    let contributors = vec![Contributor::new("a", 10), Contributor::new("b", 5)];
    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let t3 = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
    let prs = vec![
        PullRequest::new(1, Some("a"), Some(t1)),
        PullRequest::new(2, Some("a"), Some(t2)),
        PullRequest::new(3, Some("c"), Some(t3)),
    ];

    let analysis = analyze("foo", "bar", &contributors, &prs, Utc::now());

    assert_eq!(analysis.author_stats.total_merged_prs, 3);
    assert_eq!(analysis.merged_counts.get("a"), 2);
    assert_eq!(analysis.merged_counts.get("b"), 0);
    assert_eq!(analysis.merged_counts.get("c"), 1);

    let usernames: Vec<&str> = analysis
        .contributors
        .iter()
        .map(|c| c.username.as_str())
        .collect();
    assert_eq!(usernames, vec!["a"]);
    assert_eq!(analysis.contributors[0].merged_prs, 2);

    assert_eq!(analysis.repo_stats.total_contributions, 15);
    assert_eq!(analysis.repo_stats.avg_contributions_per_user, 7.5);
    assert_eq!(analysis.repo_stats.top_contributor.as_deref(), Some("a"));
    assert_eq!(analysis.author_stats.authors_with_prs, 2);
    assert_eq!(analysis.author_stats.avg_prs_per_author, 1.5);
}

#[test]
fn test_empty_contributors_are_zeroes() {
    let analysis = analyze("foo", "bar", &[], &[], Utc::now());

    assert_eq!(analysis.repo_stats.total_contributors, 0);
    assert_eq!(analysis.repo_stats.avg_contributions_per_user, 0.0);
    assert_eq!(analysis.repo_stats.top_contributor, None);
    assert_eq!(analysis.author_stats.total_merged_prs, 0);
    assert_eq!(analysis.author_stats.avg_prs_per_author, 0.0);
    assert!(analysis.contributors.is_empty());

    let charts = ChartData::build(&analysis.contributors, &analysis.author_stats);
    assert!(charts.top_contributors.is_empty());
    assert!(charts.activity_trend.is_empty());
    assert_eq!(charts.pr_distribution.len(), 4);
    assert!(charts.pr_distribution.iter().all(|slice| slice.value == 0));
}

#[test]
fn test_top_contributor_null_in_json_when_empty() {
    let analysis = analyze("foo", "bar", &[], &[], Utc::now());
    let json = serde_json::to_value(&analysis.repo_stats).unwrap();
    assert!(json["topContributor"].is_null());
    assert_eq!(json["avgContributionsPerUser"], 0.0);
}

#[test]
fn test_charts_from_many_contributors() {
    let contributors: Vec<Contributor> = (0..15)
        .map(|i| Contributor::new(format!("contributor-number-{}", i), 100 - i))
        .collect();
    let when = Some(Utc::now());
    let prs: Vec<PullRequest> = contributors
        .iter()
        .enumerate()
        .flat_map(|(i, c)| {
            (0..(15 - i as u64)).map(move |n| PullRequest::new(n, Some(c.login.as_str()), when))
        })
        .collect();

    let analysis = analyze("o", "r", &contributors, &prs, Utc::now());
    let charts = ChartData::build(&analysis.contributors, &analysis.author_stats);

    assert_eq!(charts.top_contributors.len(), 10);
    assert_eq!(charts.top_contributors[0].name, "contributor-...");
    assert_eq!(charts.top_contributors[0].username, "contributor-number-0");
    assert_eq!(charts.top_contributors[0].merged_prs, 15);

    assert_eq!(charts.activity_trend.len(), 8);
    assert_eq!(charts.activity_trend[0].label, "Contributor 1");
    assert_eq!(charts.activity_trend[7].label, "Contributor 8");

    let names: Vec<&str> = charts.pr_distribution.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["1-3 PRs", "4-10 PRs", "11-30 PRs", "31+ PRs"]);
}
