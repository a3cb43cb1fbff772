//! CLI command implementations

pub mod analyze;
pub mod base;
pub mod export;
pub mod init;
pub mod serve;
pub mod validators;

pub use analyze::{AnalyzeCommand, RequestSource};
pub use base::{Command, CommandContext};
pub use export::ExportCommand;
pub use init::InitCommand;
pub use serve::ServeCommand;
