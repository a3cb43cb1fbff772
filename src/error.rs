//! Error taxonomy of the analysis pipeline
//!
//! Internally failures keep their kind so the HTTP boundary can pick a
//! status code. What the caller sees is always the same flat failure body
//! (see [`crate::report::ErrorResponse`]) with the message as its detail.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    /// The repository URL has no owner/name pair; raised before any request
    #[error("Invalid repository URL: {0}")]
    InvalidUrl(String),

    /// A page of either collection could not be fetched or parsed
    #[error("Failed to fetch {collection}: {source:#}")]
    UpstreamFetch {
        collection: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The request document itself could not be read
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl StatsError {
    pub fn upstream(collection: &'static str, source: anyhow::Error) -> Self {
        StatsError::UpstreamFetch { collection, source }
    }

    /// HTTP status used when the error crosses the server boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            StatsError::InvalidUrl(_) | StatsError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            StatsError::UpstreamFetch { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

pub type StatsResult<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_includes_cause_chain() {
        let cause = anyhow::anyhow!("connection refused").context("Failed to fetch page 1");
        let err = StatsError::upstream("pull requests", cause);

        let message = err.to_string();
        assert!(message.starts_with("Failed to fetch pull requests"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            StatsError::InvalidUrl("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StatsError::InvalidRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StatsError::upstream("contributors", anyhow::anyhow!("x")).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
