//! CSV export of the active contributor list

use crate::stats::ActiveContributor;
use crate::utils::sanitize_for_filename;

const HEADER: [&str; 6] = [
    "Username",
    "Contributions",
    "Merged PRs",
    "Avatar URL",
    "GitHub URL",
    "Type",
];

/// Render contributors as CSV, one row per contributor after a header row
pub fn contributors_to_csv(contributors: &[ActiveContributor]) -> String {
    let mut rows = Vec::with_capacity(contributors.len() + 1);
    rows.push(HEADER.join(","));

    for c in contributors {
        let fields = [
            escape_field(&c.username),
            c.contributions.to_string(),
            c.merged_prs.to_string(),
            escape_field(&c.avatar),
            escape_field(&c.github_url),
            c.account_type.to_string(),
        ];
        rows.push(fields.join(","));
    }

    let mut csv = rows.join("\n");
    csv.push('\n');
    csv
}

/// Default export file name for a repository, e.g. `repo_contributors.csv`
pub fn default_export_filename(repo_name: &str) -> String {
    format!("{}_contributors.csv", sanitize_for_filename(repo_name))
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
