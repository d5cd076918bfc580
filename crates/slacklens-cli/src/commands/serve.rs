//! `slacklens serve` -- run the tool server over stdio.
//!
//! Exposes the Slack tools as an MCP server, reading JSON-RPC requests
//! from stdin and writing responses to stdout. MCP clients configure it
//! as a stdio server:
//!
//! ```text
//! slacklens serve
//! slacklens serve --config /path/to/config.json
//! ```

use std::sync::Arc;

use clap::Args;
use tracing::info;

use slacklens_core::tools::{self, ToolRegistry};
use slacklens_mcp::McpServerShell;
use slacklens_slack::SlackApiClient;

use super::load_config;

/// Arguments for the `slacklens serve` subcommand.
#[derive(Args)]
pub struct ServeArgs {
    /// Config file path (overrides auto-discovery).
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Run the serve command.
///
/// Loads configuration, resolves the bot token (exiting with an error
/// when none is configured), builds the tool registry, and serves it
/// over stdin/stdout until the client closes the stream.
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    let bot_token = config.slack.resolve_bot_token()?;
    let api = Arc::new(SlackApiClient::with_base_url(
        bot_token,
        config.slack.api_base_url.clone(),
    ));

    let mut registry = ToolRegistry::new();
    tools::register_all(&mut registry, api, config.server.fetch_limit);

    info!(
        tools = registry.len(),
        names = ?registry.list(),
        "MCP server ready, reading from stdin"
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    let mut shell = McpServerShell::new(registry);
    shell.run(stdin, stdout).await?;

    info!("stdin closed, MCP server shutting down");
    Ok(())
}
