//! Slack Web API client.
//!
//! [`SlackApiClient`] provides typed methods for the read subset of the
//! Slack Web API used by the tools: `conversations.replies`,
//! `conversations.history`, `conversations.info`, and `users.info`.
//! No retries, no cursor pagination: each method is one bounded request.

use reqwest::Client;
use tracing::debug;

use slacklens_types::error::SlackError;

use crate::types::{
    ConversationsInfoResponse, ConversationsMessagesResponse, SlackChannel, SlackMessage,
    SlackUser, UsersInfoResponse,
};

/// Base URL for the Slack Web API.
const SLACK_API_BASE: &str = "https://slack.com/api";

/// HTTP client for the Slack Web API.
///
/// Wraps a [`reqwest::Client`] and the bot token to provide typed
/// request methods. The base URL can be overridden for proxies and
/// test servers.
pub struct SlackApiClient {
    /// Shared HTTP client.
    http: Client,
    /// Bot token for API authorization.
    bot_token: String,
    /// Base URL for API calls.
    base_url: String,
}

impl SlackApiClient {
    /// Create a new client with the given bot token.
    pub fn new(bot_token: String) -> Self {
        Self {
            http: Client::new(),
            bot_token,
            base_url: SLACK_API_BASE.to_owned(),
        }
    }

    /// Create a client pointing at a custom base URL.
    pub fn with_base_url(bot_token: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            bot_token,
            base_url,
        }
    }

    /// Return the base URL used for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `conversations.replies` for one page of a thread.
    ///
    /// `ts` is the thread root timestamp. Slack returns the root message
    /// first, followed by replies oldest to newest.
    pub async fn conversations_replies(
        &self,
        channel: &str,
        ts: &str,
        limit: u32,
    ) -> Result<Vec<SlackMessage>, SlackError> {
        let limit = limit.to_string();
        let query = [("channel", channel), ("ts", ts), ("limit", limit.as_str())];

        debug!(channel = %channel, ts = %ts, "fetching thread replies");

        let body: ConversationsMessagesResponse =
            self.get_json("conversations.replies", &query).await?;

        if !body.ok {
            let err_msg = body.error.unwrap_or_else(|| "unknown error".into());
            return Err(SlackError::Api(format!(
                "conversations.replies failed: {err_msg}"
            )));
        }

        body.messages.ok_or_else(|| {
            SlackError::MissingPayload("conversations.replies returned ok but no messages".into())
        })
    }

    /// Call `conversations.history` for a bounded page of a channel.
    ///
    /// With `latest` set, the query runs with `inclusive=true`, so
    /// `limit = 1` fetches exactly the message carrying that timestamp
    /// when it exists.
    pub async fn conversations_history(
        &self,
        channel: &str,
        latest: Option<&str>,
        limit: u32,
    ) -> Result<Vec<SlackMessage>, SlackError> {
        let limit = limit.to_string();
        let mut query: Vec<(&str, &str)> = vec![("channel", channel), ("limit", limit.as_str())];
        if let Some(latest) = latest {
            query.push(("latest", latest));
            query.push(("inclusive", "true"));
        }

        debug!(channel = %channel, latest = ?latest, "fetching channel history");

        let body: ConversationsMessagesResponse =
            self.get_json("conversations.history", &query).await?;

        if !body.ok {
            let err_msg = body.error.unwrap_or_else(|| "unknown error".into());
            return Err(SlackError::Api(format!(
                "conversations.history failed: {err_msg}"
            )));
        }

        body.messages.ok_or_else(|| {
            SlackError::MissingPayload("conversations.history returned ok but no messages".into())
        })
    }

    /// Call `conversations.info` for channel metadata.
    pub async fn conversations_info(&self, channel: &str) -> Result<SlackChannel, SlackError> {
        let query = [("channel", channel)];

        debug!(channel = %channel, "fetching channel info");

        let body: ConversationsInfoResponse = self.get_json("conversations.info", &query).await?;

        if !body.ok {
            let err_msg = body.error.unwrap_or_else(|| "unknown error".into());
            return Err(SlackError::Api(format!(
                "conversations.info failed: {err_msg}"
            )));
        }

        body.channel.ok_or_else(|| {
            SlackError::MissingPayload("conversations.info returned ok but no channel".into())
        })
    }

    /// Call `users.info` for a user profile.
    pub async fn users_info(&self, user: &str) -> Result<SlackUser, SlackError> {
        let query = [("user", user)];

        debug!(user = %user, "fetching user info");

        let body: UsersInfoResponse = self.get_json("users.info", &query).await?;

        if !body.ok {
            let err_msg = body.error.unwrap_or_else(|| "unknown error".into());
            return Err(SlackError::Api(format!("users.info failed: {err_msg}")));
        }

        body.user
            .ok_or_else(|| SlackError::MissingPayload("users.info returned ok but no user".into()))
    }

    /// Send one authorized GET and decode the JSON envelope.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SlackError> {
        let url = format!("{}/{method}", self.base_url);

        let resp = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.bot_token))
            .query(query)
            .send()
            .await
            .map_err(|e| SlackError::RequestFailed(format!("{method}: {e}")))?;

        resp.json()
            .await
            .map_err(|e| SlackError::MalformedResponse(format!("{method}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url() {
        let client = SlackApiClient::new("xoxb-test".into());
        assert_eq!(client.base_url(), "https://slack.com/api");
    }

    #[test]
    fn custom_base_url() {
        let client =
            SlackApiClient::with_base_url("xoxb-test".into(), "http://localhost:9999".into());
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[tokio::test]
    async fn replies_returns_messages() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/conversations.replies")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("channel".into(), "C123".into()),
                mockito::Matcher::UrlEncoded("ts".into(), "1609459200.123456".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "200".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "ok": true,
                    "messages": [
                        {"ts": "1609459200.123456", "user": "U1", "text": "root"},
                        {"ts": "1609459260.000100", "user": "U2", "text": "first reply"}
                    ],
                    "has_more": false
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let messages = client
            .conversations_replies("C123", "1609459200.123456", 200)
            .await
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "root");
        assert_eq!(messages[1].user.as_deref(), Some("U2"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn replies_api_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/conversations.replies")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": false, "error": "thread_not_found"}"#)
            .create_async()
            .await;

        let client = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let err = client
            .conversations_replies("C123", "1.000000", 200)
            .await
            .unwrap_err();

        match err {
            SlackError::Api(msg) => assert!(msg.contains("thread_not_found")),
            other => panic!("expected Api error, got: {other}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn replies_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/conversations.replies")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("gateway timeout")
            .create_async()
            .await;

        let client = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let err = client
            .conversations_replies("C123", "1.000000", 200)
            .await
            .unwrap_err();
        assert!(matches!(err, SlackError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn replies_ok_without_messages() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/conversations.replies")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let err = client
            .conversations_replies("C123", "1.000000", 200)
            .await
            .unwrap_err();
        assert!(matches!(err, SlackError::MissingPayload(_)));
    }

    #[tokio::test]
    async fn history_point_lookup_sends_inclusive_latest() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/conversations.history")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("channel".into(), "C123".into()),
                mockito::Matcher::UrlEncoded("latest".into(), "1609459200.123456".into()),
                mockito::Matcher::UrlEncoded("inclusive".into(), "true".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "ok": true,
                    "messages": [{"ts": "1609459200.123456", "user": "U1", "text": "the one"}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let messages = client
            .conversations_history("C123", Some("1609459200.123456"), 1)
            .await
            .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "the one");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn history_without_latest_omits_inclusive() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/conversations.history")
            .match_query(mockito::Matcher::Exact("channel=C9&limit=10".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true, "messages": []}"#)
            .create_async()
            .await;

        let client = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let messages = client.conversations_history("C9", None, 10).await.unwrap();
        assert!(messages.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn channel_info_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/conversations.info")
            .match_query(mockito::Matcher::UrlEncoded("channel".into(), "C123".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "ok": true,
                    "channel": {
                        "id": "C123",
                        "name": "general",
                        "num_members": 7,
                        "topic": {"value": "daily standup"}
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let channel = client.conversations_info("C123").await.unwrap();

        assert_eq!(channel.id, "C123");
        assert_eq!(channel.name.as_deref(), Some("general"));
        assert_eq!(channel.num_members, Some(7));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn users_info_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users.info")
            .match_query(mockito::Matcher::UrlEncoded("user".into(), "U1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "ok": true,
                    "user": {"id": "U1", "name": "jdoe", "profile": {"display_name": "jane"}}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let user = client.users_info("U1").await.unwrap();

        assert_eq!(user.label(), "jane");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn users_info_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/users.info")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": false, "error": "user_not_found"}"#)
            .create_async()
            .await;

        let client = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let err = client.users_info("U404").await.unwrap_err();
        match err {
            SlackError::Api(msg) => assert!(msg.contains("user_not_found")),
            other => panic!("expected Api error, got: {other}"),
        }
    }
}
