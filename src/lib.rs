//! Gitstat - contributor and merged pull request statistics for GitHub repositories

pub mod analyzer;
pub mod charts;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod report;
pub mod server;
pub mod stats;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use analyzer::Analyzer;
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use error::{StatsError, StatsResult};
pub use report::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};

/// Load the default config file, or the built-in defaults when it does not exist
pub fn load_default_config() -> anyhow::Result<Config> {
    Config::load_or_default(constants::config::DEFAULT_CONFIG_FILE)
}
