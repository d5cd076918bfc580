//! Configuration schema and file discovery.
//!
//! Config lives in a single JSON file. All structs accept both
//! `snake_case` and `camelCase` field names via `#[serde(alias)]`, and
//! unknown fields are silently ignored for forward compatibility.
//!
//! The discovery order is:
//! 1. `SLACKLENS_CONFIG` environment variable (absolute path).
//! 2. `~/.slacklens/config.json`
//! 3. If none found, built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlacklensError};
use crate::secret::SecretString;

// ── Root config ──────────────────────────────────────────────────────────

/// Root configuration for the slacklens tool server.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Slack credentials and API endpoint settings.
    #[serde(default)]
    pub slack: SlackConfig,

    /// Tool server behavior settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SlacklensError::ConfigInvalid {
            reason: format!("failed to read config file {}: {e}", path.display()),
        })?;
        let config = serde_json::from_str(&contents).map_err(|e| SlacklensError::ConfigInvalid {
            reason: format!("failed to parse config file {}: {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Load configuration using the discovery chain, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        let env_override = std::env::var_os("SLACKLENS_CONFIG").map(PathBuf::from);
        match discover_config_path(env_override, dirs::home_dir()) {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::info!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Discover the config file path using the fallback chain.
///
/// Returns `None` if no candidate exists. An explicit override path is
/// returned without an existence check so a bad `SLACKLENS_CONFIG` value
/// surfaces as a load error instead of being silently skipped.
pub fn discover_config_path(
    env_override: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = env_override {
        return Some(path);
    }
    if let Some(home) = home {
        let path = home.join(".slacklens").join("config.json");
        if path.exists() {
            return Some(path);
        }
    }
    None
}

// ── Slack ────────────────────────────────────────────────────────────────

/// Slack credentials and API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Bot token used for Web API calls. Leave empty to read the token
    /// from the environment variable named by `bot_token_env`.
    #[serde(default, alias = "botToken")]
    pub bot_token: SecretString,

    /// Environment variable consulted when `bot_token` is empty.
    #[serde(default = "default_bot_token_env", alias = "botTokenEnv")]
    pub bot_token_env: String,

    /// Web API base URL. Override for proxies or test servers.
    #[serde(default = "default_api_base_url", alias = "apiBaseUrl")]
    pub api_base_url: String,
}

fn default_bot_token_env() -> String {
    "SLACK_BOT_TOKEN".into()
}
fn default_api_base_url() -> String {
    "https://slack.com/api".into()
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            bot_token: SecretString::default(),
            bot_token_env: default_bot_token_env(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl SlackConfig {
    /// Resolve the bot token: explicit config value first, then the
    /// environment variable named by `bot_token_env`.
    ///
    /// The server refuses to start without a token, so this is the one
    /// config error that is fatal at boot.
    pub fn resolve_bot_token(&self) -> Result<String> {
        self.resolve_bot_token_from(std::env::var(&self.bot_token_env).ok())
    }

    fn resolve_bot_token_from(&self, env_value: Option<String>) -> Result<String> {
        if !self.bot_token.is_empty() {
            return Ok(self.bot_token.expose().to_string());
        }
        if let Some(token) = env_value
            && !token.is_empty()
        {
            return Ok(token);
        }
        Err(SlacklensError::ConfigInvalid {
            reason: format!(
                "missing Slack bot token (set slack.bot_token or export {})",
                self.bot_token_env
            ),
        })
    }
}

// ── Server ───────────────────────────────────────────────────────────────

/// Tool server behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Maximum messages fetched for one thread read. One page, no cursor
    /// following.
    #[serde(default = "default_fetch_limit", alias = "fetchLimit")]
    pub fetch_limit: u32,
}

fn default_fetch_limit() -> u32 {
    200
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            fetch_limit: default_fetch_limit(),
        }
    }
}
