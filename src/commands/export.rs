//! Export command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::export::{contributors_to_csv, default_export_filename};
use crate::report::AnalyzeRequest;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;

/// Export command writing the active contributor list as CSV
pub struct ExportCommand {
    pub url: String,
    pub token: Option<String>,
    pub output: Option<String>,
}

#[async_trait]
impl Command for ExportCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_repository_url(&self.url)?;
        validators::validate_token(&self.token)?;
        validators::validate_output_path(&self.output)?;

        println!("{}", format!("Analyzing {}...", self.url.trim()).green());

        let request = AnalyzeRequest::new(self.url.clone(), self.token.clone());
        let response = context.analyzer().analyze(&request).await?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_export_filename(&response.repo_stats.repo_name));

        std::fs::write(&output, contributors_to_csv(&response.contributors))
            .with_context(|| format!("Failed to write {}", output))?;

        println!(
            "{}",
            format!(
                "Exported {} contributors to '{}'",
                response.contributors.len(),
                output
            )
            .green()
        );

        Ok(())
    }
}
