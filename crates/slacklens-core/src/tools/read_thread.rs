//! Thread reading tool.
//!
//! Resolves a Slack link, fetches the messages it points at, and
//! renders them as plain text with display names substituted for user
//! IDs.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use slacklens_slack::{SlackApiClient, SlackMessage};

use crate::render::{UserNameCache, render_messages};
use crate::resolver::{self, LinkInfo};
use crate::tools::registry::{Tool, ToolError};

/// Tool that reads the conversation a Slack link points at.
///
/// A link with a thread root fetches the whole thread; a link to a
/// standalone message fetches just that message. Bare channel links are
/// rejected with a pointer to the channel metadata tool.
pub struct ReadThreadTool {
    api: Arc<SlackApiClient>,
    fetch_limit: u32,
}

impl ReadThreadTool {
    /// Create a new thread reading tool backed by the given API client.
    ///
    /// `fetch_limit` caps how many messages a single thread fetch
    /// returns.
    pub fn new(api: Arc<SlackApiClient>, fetch_limit: u32) -> Self {
        Self { api, fetch_limit }
    }

    /// Fetch the messages a resolved link refers to.
    ///
    /// A thread root means a replies fetch; a standalone message means a
    /// point lookup with inclusive/latest semantics; a bare channel is
    /// not a message reference at all.
    async fn fetch(&self, link: &LinkInfo) -> Result<Vec<SlackMessage>, ToolError> {
        match &link.thread_ts {
            Some(thread_ts) => {
                debug!(channel = %link.channel_id, ts = %thread_ts, "fetching thread replies");
                self.api
                    .conversations_replies(&link.channel_id, thread_ts, self.fetch_limit)
                    .await
                    .map_err(|e| ToolError::ExecutionFailed(e.to_string()))
            }
            None if !link.message_ts.is_empty() => {
                debug!(channel = %link.channel_id, ts = %link.message_ts, "fetching single message");
                self.api
                    .conversations_history(&link.channel_id, Some(link.message_ts.as_str()), 1)
                    .await
                    .map_err(|e| ToolError::ExecutionFailed(e.to_string()))
            }
            None => Err(ToolError::InvalidArgs(
                "link names a channel, not a message; use slack_channel_info instead".into(),
            )),
        }
    }
}

#[async_trait]
impl Tool for ReadThreadTool {
    fn name(&self) -> &str {
        "slack_read_thread"
    }

    fn description(&self) -> &str {
        "Fetch the Slack thread or message a share link points at and render it as text."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "Slack link to a message or thread"
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

        let messages = self.fetch(&link).await?;

        let mut cache = UserNameCache::new();
        let text = render_messages(self.api.as_ref(), &messages, &mut cache).await;
        if text.is_empty() {
            return Ok(json!("(no messages)"));
        }
        Ok(json!(text))
    }
}
