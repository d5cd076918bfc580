//! Channel metadata tool.
//!
//! Resolves a Slack link to its channel and renders the channel's
//! metadata as a short text summary.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use slacklens_slack::SlackApiClient;

use crate::render::render_channel;
use crate::resolver;
use crate::tools::registry::{Tool, ToolError};

/// Tool that looks up channel metadata for any resolvable Slack link.
///
/// Works for bare channel links as well as message links, since every
/// resolved link carries a channel ID.
pub struct ChannelInfoTool {
    api: Arc<SlackApiClient>,
}

impl ChannelInfoTool {
    /// Create a new channel info tool backed by the given API client.
    pub fn new(api: Arc<SlackApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for ChannelInfoTool {
    fn name(&self) -> &str {
        "slack_channel_info"
    }

    fn description(&self) -> &str {
        "Fetch name, visibility, and other metadata for the channel a Slack link points at."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "Slack link to a channel, message, or thread"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let url = args
            .get("url")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidArgs("missing required field: url".into()))?;

        let link = resolver::resolve_checked(url)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        debug!(channel = %link.channel_id, "fetching channel info");
        let channel = self
            .api
            .conversations_info(&link.channel_id)
            .await
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;

        Ok(json!(render_channel(&channel)))
    }
}
