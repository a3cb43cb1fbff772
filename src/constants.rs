//! Central constants for the gitstat application

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub use gitstat_github::DEFAULT_API_BASE as API_BASE;

    /// Public web host used to build canonical repository URLs
    pub const WEB_BASE: &str = "https://github.com";

    /// Environment variable consulted when no credential is configured
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
}

/// Default bounds for collection pagination
pub mod pagination {
    /// Items requested per page (GitHub's maximum)
    pub const PER_PAGE: u32 = 100;

    /// Highest page number requested before the fetch is aborted
    pub const MAX_PAGES: u32 = 300;

    /// Items accepted per collection before the fetch is aborted
    pub const MAX_ITEMS: usize = 30_000;
}

/// Presentation policy for the chart series
pub mod charts {
    /// Contributors shown in the top contributors chart
    pub const TOP_CONTRIBUTORS: usize = 10;

    /// Contributors shown in the activity chart
    pub const ACTIVITY_ENTRIES: usize = 8;

    /// Display names longer than this are truncated
    pub const NAME_MAX_CHARS: usize = 12;

    /// Appended to truncated display names
    pub const ELLIPSIS: &str = "...";
}

/// Response envelope values
pub mod response {
    /// Version tag reported in response metadata
    pub const API_VERSION: &str = "1.0";

    /// Fixed message of every failure response
    pub const GENERIC_ERROR: &str = "An error occurred while processing the request.";

    /// Explains why the contributor list is shorter than the contributor count
    pub const FILTER_NOTE: &str = "Contributors with 0 merged PRs have been filtered out";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "gitstat.yaml";

    /// Default address for the HTTP server
    pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
}
