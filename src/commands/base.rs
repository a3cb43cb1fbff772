//! Base types and traits for the command pattern

use crate::analyzer::Analyzer;
use crate::config::Config;
use anyhow::Result;

/// Context passed to all commands containing shared configuration
#[derive(Clone)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: Config,
}

impl CommandContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Analyzer built from the configured API root, credential and limits
    pub fn analyzer(&self) -> Analyzer {
        Analyzer::from_config(&self.config)
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
