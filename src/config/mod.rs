//! Configuration management module

pub mod loader;
pub mod validation;

pub use loader::{Config, GitHubSettings, PaginationSettings, ServerSettings};
pub use validation::{ValidationError, validate_config};
