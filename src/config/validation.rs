//! Configuration validation
//!
//! Every rule is checked and all violations are reported together, so a
//! broken config file can be fixed in one pass.

use super::Config;
use gitstat_github::MAX_PER_PAGE;
use std::net::SocketAddr;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// API base is not an http(s) URL
    InvalidApiBase(String),
    /// Page size outside GitHub's accepted range
    PerPageOutOfRange(u32),
    /// Page ceiling of zero
    ZeroMaxPages,
    /// Item ceiling of zero
    ZeroMaxItems,
    /// Bind address does not parse
    InvalidBindAddress(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidApiBase(url) => {
                write!(f, "github.api_base must be an http(s) URL: '{}'", url)
            }
            ValidationError::PerPageOutOfRange(value) => {
                write!(
                    f,
                    "pagination.per_page must be between 1 and {}: {}",
                    MAX_PER_PAGE,
                    value
                )
            }
            ValidationError::ZeroMaxPages => write!(f, "pagination.max_pages must be at least 1"),
            ValidationError::ZeroMaxItems => write!(f, "pagination.max_items must be at least 1"),
            ValidationError::InvalidBindAddress(bind) => {
                write!(f, "server.bind is not a socket address: '{}'", bind)
            }
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let api_base = config.github.api_base.trim();
    if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
        errors.push(ValidationError::InvalidApiBase(api_base.to_string()));
    }

    let per_page = config.pagination.per_page;
    if per_page == 0 || per_page > MAX_PER_PAGE {
        errors.push(ValidationError::PerPageOutOfRange(per_page));
    }

    if config.pagination.max_pages == 0 {
        errors.push(ValidationError::ZeroMaxPages);
    }

    if config.pagination.max_items == 0 {
        errors.push(ValidationError::ZeroMaxItems);
    }

    if config.server.bind.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Convert a list of validation errors to a single anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow::anyhow!("Validation errors: {}", error_messages.join("; "))
}
