//! CLI command implementations for `slacklens`.
//!
//! Each subcommand is implemented in its own module:
//!
//! - [`serve`] -- MCP tool server over stdio.
//! - [`resolve_cmd`] -- Offline link resolution.

pub mod resolve_cmd;
pub mod serve;

use std::path::Path;

use slacklens_types::Config;

/// Load configuration from the given path override or via auto-discovery.
///
/// If `config_override` is provided, loads from that path. Otherwise,
/// uses the discovery chain:
/// 1. `SLACKLENS_CONFIG` env var
/// 2. `~/.slacklens/config.json`
///
/// Returns a default `Config` if no config file is found.
pub fn load_config(config_override: Option<&str>) -> anyhow::Result<Config> {
    let config = match config_override {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };
    Ok(config)
}
