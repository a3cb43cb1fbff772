//! GitHub API client library
//!
//! This library provides the upstream side of gitstat: an authenticated
//! client for GitHub's REST API, a bounded page-by-page fetcher, and the
//! contributor and pull request payload types.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`pagination`]: Stop-on-empty-page collection fetching
//! - [`contributors`]: Contributor listing
//! - [`pull_requests`]: Closed pull request listing
//! - [`util`]: Utility functions for GitHub operations

mod client;
mod contributors;
mod pagination;
mod pull_requests;
mod util;

// Re-export public API
pub use client::{DEFAULT_API_BASE, DEFAULT_USER_AGENT, GitHubClient};
pub use contributors::{AccountType, Contributor};
pub use pagination::{MAX_PER_PAGE, PageLimits, PageSource, fetch_all_pages};
pub use pull_requests::{PullRequest, User};
pub use util::parse_github_url;
