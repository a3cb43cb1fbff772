//! Common test support utilities and fixtures
//!
//! This module provides shared functionality to reduce code duplication
//! across integration and E2E tests: upstream payload fixtures, an in-process
//! mock of the GitHub contributor and pull request endpoints, and a CLI runner.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use gitstat::{Analyzer, Config};
use gitstat_github::{GitHubClient, PageLimits};
use serde::Deserialize;
use serde_json::{Value, json};
use std::process::Command;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the gitstat CLI with given arguments
pub fn run_cli(args: &[&str], cwd: Option<&std::path::Path>) -> CliOutput {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--bin", "gitstat", "--"]);
    cmd.args(args);
    cmd.env_remove("GITHUB_TOKEN");

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().expect("Failed to execute cargo run");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// A temporary directory holding a config file
pub struct Workspace {
    pub root: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.root.path()
    }

    /// Path of a file inside the workspace as a string
    pub fn file(&self, name: &str) -> String {
        self.root.path().join(name).to_string_lossy().into_owned()
    }

    /// Write a file into the workspace, returning its path
    pub fn write(&self, name: &str, content: &str) -> String {
        let path = self.file(name);
        std::fs::write(&path, content).expect("Failed to write workspace file");
        path
    }
}

/// Contributor item as the upstream API returns it
pub fn contributor_json(login: &str, contributions: u64) -> Value {
    json!({
        "login": login,
        "id": 1,
        "avatar_url": format!("https://avatars.githubusercontent.com/{}", login),
        "html_url": format!("https://github.com/{}", login),
        "type": "User",
        "contributions": contributions,
    })
}

/// Closed pull request item; `merged` decides whether `merged_at` is set
pub fn pull_json(number: u64, author: Option<&str>, merged: bool) -> Value {
    json!({
        "number": number,
        "state": "closed",
        "title": format!("PR #{}", number),
        "user": author.map(|login| json!({ "login": login })),
        "merged_at": if merged { json!("2024-01-15T10:00:00Z") } else { Value::Null },
    })
}

/// How the mock upstream should misbehave
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Failure {
    None,
    Contributors,
    PullRequests,
    /// Contributors answer `204 No Content`, as GitHub does for empty repositories
    EmptyRepository,
}

/// One request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub collection: String,
    pub owner: String,
    pub repo: String,
    pub page: u32,
    pub per_page: u32,
    pub state: Option<String>,
    pub authorization: Option<String>,
}

struct MockState {
    contributors: Vec<Value>,
    pulls: Vec<Value>,
    failure: Failure,
    seen: Mutex<Vec<SeenRequest>>,
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u32>,
    per_page: Option<u32>,
    state: Option<String>,
}

/// In-process stand-in for the GitHub REST endpoints the analysis reads
pub struct MockGitHub {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockGitHub {
    pub async fn start(contributors: Vec<Value>, pulls: Vec<Value>) -> Self {
        Self::start_with_failure(contributors, pulls, Failure::None).await
    }

    pub async fn start_with_failure(
        contributors: Vec<Value>,
        pulls: Vec<Value>,
        failure: Failure,
    ) -> Self {
        let state = Arc::new(MockState {
            contributors,
            pulls,
            failure,
            seen: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/repos/{owner}/{repo}/contributors", get(contributors_handler))
            .route("/repos/{owner}/{repo}/pulls", get(pulls_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Requests received so far, in arrival order
    pub fn seen(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().unwrap().clone()
    }

    /// Requests received for one collection, in arrival order
    pub fn seen_for(&self, collection: &str) -> Vec<SeenRequest> {
        self.seen()
            .into_iter()
            .filter(|r| r.collection == collection)
            .collect()
    }

    pub fn client(&self, token: Option<&str>) -> GitHubClient {
        GitHubClient::new(token.map(str::to_string)).with_api_base(self.base_url.clone())
    }

    pub fn analyzer(&self, limits: PageLimits) -> Analyzer {
        Analyzer::new(self.client(None), limits)
    }

    /// Configuration pointing at the mock
    pub fn config(&self) -> Config {
        let mut config = Config::new();
        config.github.api_base = self.base_url.clone();
        config
    }
}

async fn contributors_handler(
    State(state): State<Arc<MockState>>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    serve_page(&state, "contributors", owner, repo, query, &headers)
}

async fn pulls_handler(
    State(state): State<Arc<MockState>>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    serve_page(&state, "pulls", owner, repo, query, &headers)
}

fn serve_page(
    state: &MockState,
    collection: &str,
    owner: String,
    repo: String,
    query: PageQuery,
    headers: &HeaderMap,
) -> Response {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(30);

    state.seen.lock().unwrap().push(SeenRequest {
        collection: collection.to_string(),
        owner,
        repo,
        page,
        per_page,
        state: query.state,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let (items, failing) = match collection {
        "contributors" => (&state.contributors, state.failure == Failure::Contributors),
        _ => (&state.pulls, state.failure == Failure::PullRequests),
    };

    if collection == "contributors" && state.failure == Failure::EmptyRepository {
        return StatusCode::NO_CONTENT.into_response();
    }

    if failing {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Server Error" })),
        )
            .into_response();
    }

    let start = (page as usize - 1) * per_page as usize;
    let body: Vec<Value> = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    Json(body).into_response()
}
