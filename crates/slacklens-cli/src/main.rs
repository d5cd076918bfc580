//! `slacklens` -- Slack link resolution and thread reading tools.
//!
//! Provides the following subcommands:
//!
//! - `slacklens serve` -- Run the MCP tool server on stdin/stdout.
//! - `slacklens resolve` -- Resolve a Slack link without calling the API.

use clap::{Parser, Subcommand};

mod commands;

/// slacklens CLI.
#[derive(Parser)]
#[command(
    name = "slacklens",
    about = "Slack link resolution and thread reading tools",
    version
)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run the MCP tool server on stdin/stdout.
    Serve(commands::serve::ServeArgs),

    /// Resolve a Slack link into API identifiers without calling the API.
    Resolve(commands::resolve_cmd::ResolveArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr: in serve mode stdout carries the protocol.
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve(args) => commands::serve::run(args).await?,
        Commands::Resolve(args) => commands::resolve_cmd::run(args)?,
    }

    Ok(())
}
