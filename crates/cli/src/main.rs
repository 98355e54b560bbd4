//! promptsync CLI
//!
//! Main entry point for the promptsync command-line tool.
//! Pulls baseline prompt templates from a remote catalog and publishes
//! validated revisions back to it.

mod commands;

use clap::{Parser, Subcommand};
use commands::{PullCommand, PushCommand};
use promptsync_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// promptsync - prompt template lifecycle against a remote catalog
#[derive(Parser, Debug)]
#[command(name = "promptsync")]
#[command(about = "Pull, validate, and publish prompt templates", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "PROMPTSYNC_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "PROMPTSYNC_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog base URL
    #[arg(short, long, global = true, env = "PROMPTSYNC_ENDPOINT")]
    endpoint: Option<String>,

    /// Namespace prefixed to prompt names on publish
    #[arg(short, long, global = true, env = "PROMPTSYNC_NAMESPACE")]
    namespace: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pull a baseline template from the catalog into the local document
    Pull(PullCommand),

    /// Validate a local entry and publish it to the catalog
    Push(PushCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.workspace,
        cli.config,
        cli.endpoint,
        cli.namespace,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("promptsync CLI starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Endpoint: {}", config.endpoint);

    // Ensure the prompts directory exists
    config.ensure_prompts_dir()?;

    let command_name = match &cli.command {
        Commands::Pull(_) => "pull",
        Commands::Push(_) => "push",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Pull(cmd) => cmd.execute(&config).await,
        Commands::Push(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
