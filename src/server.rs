//! HTTP boundary
//!
//! `POST /api/gitstat` accepts an [`AnalyzeRequest`] body and answers with
//! an [`AnalyzeResponse`] or the flat [`ErrorResponse`]. `GET /health`
//! reports liveness.

use crate::analyzer::Analyzer;
use crate::error::StatsError;
use crate::report::{AnalyzeRequest, ErrorResponse};
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared, read-only state of the server
pub struct AppState {
    pub analyzer: Analyzer,
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

/// Build the application router
pub fn create_router(analyzer: Analyzer) -> Router {
    let state = Arc::new(AppState { analyzer });

    Router::new()
        .route("/api/gitstat", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return StatsError::InvalidRequest(rejection.body_text()).into_response();
        }
    };

    match state.analyzer.analyze(&request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            warn!(url = %request.url, error = %err, "Analysis failed");
            err.into_response()
        }
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Serve until Ctrl-C
pub async fn serve(addr: SocketAddr, analyzer: Analyzer) -> Result<()> {
    let router = create_router(analyzer);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", listener.local_addr()?);
    info!("  POST /api/gitstat - Analyze a repository");
    info!("  GET  /health      - Liveness probe");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
