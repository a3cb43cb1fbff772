//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. It handles domain-specific validation rules that
//! go beyond basic argument parsing.

use anyhow::{Result, anyhow};
use std::net::SocketAddr;
use std::path::Path;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Mutually exclusive arguments were both provided
    MutualExclusivity { first: String, second: String },
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MutualExclusivity { first, second } => {
                write!(f, "Cannot specify both {} and {}", first, second)
            }
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "Either {} or {} must be provided",
                        alternatives.join(", "),
                        argument
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate analyze command arguments
///
/// Ensures that exactly one of a repository URL or a request document is provided
pub fn validate_analyze_args(url: &Option<String>, request: &Option<String>) -> Result<()> {
    match (url.as_ref(), request.as_ref()) {
        (None, None) => Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "a repository URL".to_string(),
                alternatives: vec!["--request".to_string()],
            },
        )),
        (Some(_), Some(_)) => Err(validation_error_to_anyhow(
            CommandValidationError::MutualExclusivity {
                first: "a repository URL".to_string(),
                second: "--request".to_string(),
            },
        )),
        (Some(url), None) => validate_repository_url(url),
        (None, Some(path)) => {
            if path.trim().is_empty() {
                return Err(validation_error_to_anyhow(
                    CommandValidationError::InvalidValue {
                        argument: "--request".to_string(),
                        value: path.clone(),
                        reason: "path cannot be empty (use '-' for stdin)".to_string(),
                    },
                ));
            }
            Ok(())
        }
    }
}

/// Validate a repository URL argument
///
/// Only emptiness is checked here; the URL format is checked by the analysis
/// itself so the CLI and the server report malformed URLs the same way.
pub fn validate_repository_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "repository URL".to_string(),
                value: url.to_string(),
                reason: "URL cannot be empty or whitespace only".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate token argument
///
/// Ensures a provided token is not blank
pub fn validate_token(token: &Option<String>) -> Result<()> {
    if let Some(token) = token
        && token.trim().is_empty()
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--token".to_string(),
                value: token.clone(),
                reason: "token cannot be empty or whitespace only".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate bind address
///
/// Ensures the address parses as `ip:port`
pub fn validate_bind_address(bind: &Option<String>) -> Result<()> {
    if let Some(addr) = bind
        && addr.parse::<SocketAddr>().is_err()
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--bind".to_string(),
                value: addr.clone(),
                reason: "expected an address like 127.0.0.1:3000".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate export output path
///
/// Ensures the path is not blank and does not name an existing directory
pub fn validate_output_path(output: &Option<String>) -> Result<()> {
    if let Some(path) = output {
        if path.trim().is_empty() {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "--output".to_string(),
                    value: path.clone(),
                    reason: "output path cannot be empty or whitespace only".to_string(),
                },
            ));
        }

        if Path::new(path).is_dir() {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "--output".to_string(),
                    value: path.clone(),
                    reason: "output path is a directory".to_string(),
                },
            ));
        }
    }
    Ok(())
}
