//! Utility functions for GitHub operations

use anyhow::{Result, anyhow};

/// Parse a repository URL to extract owner and repository name
///
/// Owner and name are the first two path segments after the host, so
/// anything after them (`/tree/main`, `/pulls`, a query string or a
/// fragment) is ignored. Supported formats:
/// - HTTPS: `https://github.com/owner/repo` (also `http://`, any host)
/// - SSH: `git@github.com:owner/repo.git`
/// - Scheme-less: `github.com/owner/repo`
///
/// # Errors
/// Returns an error if no owner/repository pair can be found
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let invalid = || anyhow!("Invalid GitHub URL format: {}", url);

    let trimmed = url.trim();
    let trimmed = trimmed.split(['?', '#']).next().unwrap_or_default();

    let path = if let Some(rest) = trimmed.strip_prefix("git@") {
        // git@host:owner/repo
        let (_host, path) = rest.split_once(':').ok_or_else(invalid)?;
        path
    } else {
        let without_scheme = match trimmed.split_once("://") {
            Some((_scheme, rest)) => rest,
            None => trimmed,
        };
        let (host, path) = without_scheme.split_once('/').ok_or_else(invalid)?;
        let has_scheme = without_scheme.len() != trimmed.len();
        if host.is_empty() || (!has_scheme && !host.contains('.')) {
            return Err(invalid());
        }
        path
    };

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let owner = segments.next().ok_or_else(invalid)?;
    let repo = segments.next().ok_or_else(invalid)?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if repo.is_empty() || owner == "." || owner == ".." || repo == "." || repo == ".." {
        return Err(invalid());
    }

    Ok((owner.to_string(), repo.to_string()))
}
