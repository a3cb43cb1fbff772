//! Analyze command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::report::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
use crate::stats::PrTier;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use std::io::Read;

/// Where the analyze command takes its request from
#[derive(Debug, Clone, PartialEq)]
pub enum RequestSource {
    /// A repository URL given on the command line
    Url(String),
    /// A JSON request document; `-` reads it from stdin
    Document(String),
}

impl RequestSource {
    /// Build the source from the mutually exclusive CLI arguments
    pub fn from_args(url: Option<String>, request: Option<String>) -> Result<Self> {
        validators::validate_analyze_args(&url, &request)?;
        if let Some(url) = url {
            return Ok(RequestSource::Url(url));
        }
        request
            .map(RequestSource::Document)
            .context("Either --request or a repository URL must be provided")
    }

    /// Resolve into a request; `token` fills in when the document carries none
    pub fn load(&self, token: Option<String>) -> Result<AnalyzeRequest> {
        match self {
            RequestSource::Url(url) => Ok(AnalyzeRequest::new(url.clone(), token)),
            RequestSource::Document(path) => {
                let content = if path == "-" {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read request from stdin")?;
                    buf
                } else {
                    std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read request file {}", path))?
                };

                let mut request = AnalyzeRequest::from_json(&content)?;
                if request.token.as_deref().is_none_or(|t| t.trim().is_empty()) {
                    request.token = token;
                }
                Ok(request)
            }
        }
    }
}

/// Analyze command printing repository statistics
pub struct AnalyzeCommand {
    pub source: RequestSource,
    pub token: Option<String>,
    pub json: bool,
}

#[async_trait]
impl Command for AnalyzeCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_token(&self.token)?;

        let request = self.source.load(self.token.clone())?;

        if !self.json {
            println!(
                "{}",
                format!("Analyzing {}...", request.url.trim()).green()
            );
        }

        match context.analyzer().analyze(&request).await {
            Ok(response) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                } else {
                    print!("{}", render_summary(&response));
                }
                Ok(())
            }
            Err(err) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&err))?);
                }
                Err(err.into())
            }
        }
    }
}

/// Human-readable summary of an analysis
pub fn render_summary(response: &AnalyzeResponse) -> String {
    let repo = &response.repo_stats;
    let authors = &response.author_stats;
    let mut out = String::new();

    out.push_str(&format!(
        "\n{} {}\n",
        format!("{}/{}", repo.owner, repo.repo_name).bold(),
        format!("({})", repo.repo_url).dimmed()
    ));
    out.push_str(&format!(
        "  Contributors:        {} total, {} with merged PRs\n",
        repo.total_contributors, repo.active_contributors
    ));
    out.push_str(&format!(
        "  Contributions:       {} total, {:.2} per contributor\n",
        repo.total_contributions, repo.avg_contributions_per_user
    ));
    out.push_str(&format!(
        "  Merged PRs:          {} by {} authors, {:.2} per author\n",
        authors.total_merged_prs, authors.authors_with_prs, authors.avg_prs_per_author
    ));
    out.push_str(&format!(
        "  Top contributor:     {}\n",
        repo.top_contributor.as_deref().unwrap_or("-")
    ));

    let tiers: Vec<String> = PrTier::ALL
        .iter()
        .map(|tier| format!("{}: {}", tier.label(), authors.pr_distribution.get(*tier)))
        .collect();
    out.push_str(&format!("  PR distribution:     {}\n", tiers.join(", ")));

    if response.contributors.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            "No contributors with merged pull requests".yellow()
        ));
        return out;
    }

    out.push_str(&format!("\n{}\n", "Top contributors by merged PRs".bold()));
    for bar in &response.charts.top_contributors {
        out.push_str(&format!(
            "  {:<20} {:>5} merged  {:>6} contributions\n",
            bar.username.cyan(),
            bar.merged_prs,
            bar.contributions
        ));
    }

    out
}
