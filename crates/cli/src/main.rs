//! Promptvault CLI
//!
//! Main entry point for the promptvault command-line tool.
//! Loads YAML prompt definitions from a local tree or versioned snapshots
//! in blob storage, and cuts new semantic-versioned snapshots.

mod commands;

use clap::{Parser, Subcommand};
use commands::{GetCommand, RestoreCommand, SnapshotCommand, VersionsCommand};
use promptvault_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Promptvault - versioned prompt management
#[derive(Parser, Debug)]
#[command(name = "promptvault")]
#[command(about = "Versioned YAML prompt management", long_about = None)]
#[command(version)]
struct Cli {
    /// Root of the local prompt tree (default: prompts)
    #[arg(short = 'd', long, global = true, env = "PROMPTVAULT_DIR")]
    prompts_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "PROMPTVAULT_CONFIG")]
    config: Option<PathBuf>,

    /// Path-resolution scheme (hierarchical, brand-metric)
    #[arg(short, long, global = true, env = "PROMPTVAULT_SCHEME")]
    scheme: Option<String>,

    /// Blob backend for snapshots (fs, memory)
    #[arg(long, global = true, env = "PROMPTVAULT_REMOTE_BACKEND")]
    remote_backend: Option<String>,

    /// Bucket root for snapshots; remote features are off without it
    #[arg(long, global = true, env = "PROMPTVAULT_REMOTE_ROOT")]
    remote_root: Option<PathBuf>,

    /// Base path under the bucket root
    #[arg(long, global = true, env = "PROMPTVAULT_REMOTE_BASE")]
    remote_base: Option<String>,

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
    /// Load a prompt and print it
    Get(GetCommand),

    /// List snapshot versions, newest first
    Versions(VersionsCommand),

    /// Snapshot the local prompt tree to remote storage
    Snapshot(SnapshotCommand),

    /// Download a snapshot into the local prompt tree
    Restore(RestoreCommand),
}

fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.prompts_dir,
        cli.config,
        cli.scheme,
        cli.remote_backend,
        cli.remote_root,
        cli.remote_base,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Promptvault CLI starting");
    tracing::debug!("Prompt dir: {:?}", config.local_dir);
    tracing::debug!("Scheme: {}", config.scheme);

    let command_name = match &cli.command {
        Commands::Get(_) => "get",
        Commands::Versions(_) => "versions",
        Commands::Snapshot(_) => "snapshot",
        Commands::Restore(_) => "restore",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result: AppResult<()> = match cli.command {
        Commands::Get(cmd) => cmd.execute(&config),
        Commands::Versions(cmd) => cmd.execute(&config),
        Commands::Snapshot(cmd) => cmd.execute(&config),
        Commands::Restore(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    Ok(result?)
}
