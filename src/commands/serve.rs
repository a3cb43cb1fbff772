//! Serve command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::server;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Serve command running the HTTP API
pub struct ServeCommand {
    /// Overrides `server.bind` from the configuration
    pub bind: Option<String>,
}

#[async_trait]
impl Command for ServeCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_bind_address(&self.bind)?;

        let mut config = context.config.clone();
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        let addr = config.bind_addr()?;

        println!(
            "{}",
            format!("Starting server on http://{} (Ctrl-C to stop)", addr).green()
        );
        if config.github.token.is_some() {
            println!(
                "{}",
                "Requests without a token will use the configured GitHub token".yellow()
            );
        }

        server::serve(addr, context.analyzer()).await
    }
}
