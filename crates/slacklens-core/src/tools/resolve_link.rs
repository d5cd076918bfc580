//! Link resolution tool.
//!
//! The one pure tool: turns a Slack share link into API identifiers
//! without touching the network.

use async_trait::async_trait;
use serde_json::json;

use crate::resolver;
use crate::tools::registry::{Tool, ToolError};

/// Tool that resolves a Slack link into its `workspace` / `channelId` /
/// `messageTs` / `threadTs` identifiers.
pub struct ResolveLinkTool;

#[async_trait]
impl Tool for ResolveLinkTool {
    fn name(&self) -> &str {
        "slack_resolve_link"
    }

    fn description(&self) -> &str {
        "Resolve a Slack message, thread, or channel link into API identifiers. Does not call the Slack API."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "Slack share link (archives or client form)"
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

        serde_json::to_value(&link)
            .map_err(|e| ToolError::ExecutionFailed(format!("failed to serialize result: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_stable() {
        assert_eq!(ResolveLinkTool.name(), "slack_resolve_link");
    }

    #[test]
    fn parameters_require_url() {
        let params = ResolveLinkTool.parameters();
        let required = params["required"].as_array().unwrap();
        assert!(required.contains(&json!("url")));
    }

    #[tokio::test]
    async fn missing_url_returns_invalid_args() {
        let err = ResolveLinkTool.execute(json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgs(_)));
    }

    #[tokio::test]
    async fn resolves_archive_link_to_wire_fields() {
        let result = ResolveLinkTool
            .execute(json!({
                "url": "https://acme.slack.com/archives/C123/p1609459200123456"
            }))
            .await
            .unwrap();

        assert_eq!(result["workspace"], "acme");
        assert_eq!(result["channelId"], "C123");
        assert_eq!(result["messageTs"], "1609459200.123456");
        assert_eq!(result["threadTs"], "1609459200.123456");
    }

    #[tokio::test]
    async fn foreign_host_names_the_failure() {
        let err = ResolveLinkTool
            .execute(json!({ "url": "https://example.com/archives/C123" }))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not a Slack URL"));
    }

    #[tokio::test]
    async fn unknown_shape_names_the_failure() {
        let err = ResolveLinkTool
            .execute(json!({ "url": "https://acme.slack.com/archives/" }))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("unrecognized Slack link format"));
    }
}
