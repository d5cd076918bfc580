//! `slacklens resolve` -- resolve a Slack link from the command line.
//!
//! Runs the link resolver directly and prints the resulting identifiers
//! as formatted JSON. Needs no token and makes no network calls.
//!
//! ```text
//! slacklens resolve https://acme.slack.com/archives/C123/p1609459200123456
//! ```

use clap::Args;

use slacklens_core::resolve_checked;

/// Arguments for the `slacklens resolve` subcommand.
#[derive(Args)]
pub struct ResolveArgs {
    /// Slack share link to resolve.
    pub url: String,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs) -> anyhow::Result<()> {
    let link = resolve_checked(&args.url)
        .map_err(|e| anyhow::anyhow!("cannot resolve {}: {e}", args.url))?;
    println!("{}", serde_json::to_string_pretty(&link)?);
    Ok(())
}
