use anyhow::Result;
use clap::{Parser, Subcommand};
use gitstat::{commands::*, config::Config, constants};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gitstat")]
#[command(about = "Contributor and merged pull request statistics for GitHub repositories")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a repository and print its statistics
    Analyze {
        /// Repository URL, e.g. https://github.com/owner/repo
        url: Option<String>,

        /// Read a JSON request document from a file ('-' for stdin)
        #[arg(long)]
        request: Option<String>,

        /// GitHub token
        #[arg(long, env = constants::github::TOKEN_ENV_VAR, hide_env_values = true)]
        token: Option<String>,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,

        /// Configuration file path
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        config: String,
    },

    /// Export contributors with merged pull requests as CSV
    Export {
        /// Repository URL, e.g. https://github.com/owner/repo
        url: String,

        /// Output file (default: <repo>_contributors.csv)
        #[arg(short, long)]
        output: Option<String>,

        /// GitHub token
        #[arg(long, env = constants::github::TOKEN_ENV_VAR, hide_env_values = true)]
        token: Option<String>,

        /// Configuration file path
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        config: String,
    },

    /// Serve the analysis over HTTP
    ///
    /// Requests that carry no token are sent upstream with the configured
    /// github.token (or GITHUB_TOKEN from the server's environment), so
    /// anonymous callers spend the operator's rate limit.
    Serve {
        /// Address to listen on (overrides server.bind)
        #[arg(short, long)]
        bind: Option<String>,

        /// Configuration file path
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        config: String,
    },

    /// Create a configuration file with the default settings
    Init {
        /// Output file name
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        output: String,

        /// Overwrite existing file if it exists
        #[arg(long)]
        overwrite: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "gitstat=debug,gitstat_github=debug,tower_http=debug"
    } else {
        "gitstat=info,gitstat_github=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(command) => execute_command(command).await,
        None => anyhow::bail!("No command provided. Use --help for usage information."),
    }
}

async fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            url,
            request,
            token,
            json,
            config,
        } => {
            let context = CommandContext::new(Config::load_or_default(&config)?);
            AnalyzeCommand {
                source: RequestSource::from_args(url, request)?,
                token,
                json,
            }
            .execute(&context)
            .await?;
        }
        Commands::Export {
            url,
            output,
            token,
            config,
        } => {
            let context = CommandContext::new(Config::load_or_default(&config)?);
            ExportCommand { url, token, output }
                .execute(&context)
                .await?;
        }
        Commands::Serve { bind, config } => {
            let context = CommandContext::new(Config::load_or_default(&config)?);
            ServeCommand { bind }.execute(&context).await?;
        }
        Commands::Init { output, overwrite } => {
            // Init command doesn't need config since it creates one
            let context = CommandContext::new(Config::new());
            InitCommand { output, overwrite }
                .execute(&context)
                .await?;
        }
    }

    Ok(())
}
