//! Human-readable rendering of fetched Slack data.
//!
//! Turns message lists and channel objects into the plain text the
//! tools return. Author user IDs are resolved to display names through
//! a per-request cache so each distinct user costs at most one
//! `users.info` call.

use std::collections::HashMap;

use slacklens_slack::{SlackApiClient, SlackChannel, SlackMessage};

/// Per-request map from user ID to resolved display name.
///
/// Built fresh for each top-level tool call and dropped with it, never
/// shared across requests.
#[derive(Debug, Default)]
pub struct UserNameCache {
    names: HashMap<String, String>,
}

impl UserNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for a user ID, fetched on first use.
    ///
    /// Lookup failures are cached too (as the raw ID), so a broken user
    /// reference costs one request rather than one per message.
    pub async fn display_name(&mut self, api: &SlackApiClient, user_id: &str) -> String {
        if let Some(name) = self.names.get(user_id) {
            return name.clone();
        }
        let name = match api.users_info(user_id).await {
            Ok(user) => user.label().to_owned(),
            Err(err) => {
                tracing::debug!(user_id, error = %err, "user lookup failed, using raw ID");
                user_id.to_owned()
            }
        };
        self.names.insert(user_id.to_owned(), name.clone());
        name
    }
}

/// Render messages as chronological `[author] text` lines.
///
/// The replies endpoint returns messages oldest-first, so input order
/// is kept as-is.
pub async fn render_messages(
    api: &SlackApiClient,
    messages: &[SlackMessage],
    cache: &mut UserNameCache,
) -> String {
    let mut lines = Vec::with_capacity(messages.len());
    for message in messages {
        let author = author_label(api, message, cache).await;
        lines.push(format!("[{author}] {}", message.text));
    }
    lines.join("\n")
}

/// Author column for one message: resolved user name, then bot display
/// name, then bot ID, then a placeholder.
async fn author_label(
    api: &SlackApiClient,
    message: &SlackMessage,
    cache: &mut UserNameCache,
) -> String {
    if let Some(user) = &message.user {
        return cache.display_name(api, user).await;
    }
    if let Some(username) = &message.username
        && !username.is_empty()
    {
        return username.clone();
    }
    if let Some(bot_id) = &message.bot_id {
        return bot_id.clone();
    }
    "unknown".to_owned()
}

/// Render channel metadata as a short multi-line summary.
pub fn render_channel(channel: &SlackChannel) -> String {
    let mut lines = Vec::new();

    let heading = match &channel.name {
        Some(name) => format!("Channel: #{name} ({})", channel.id),
        None if channel.is_im => format!("Direct message: {}", channel.id),
        None => format!("Channel: {}", channel.id),
    };
    lines.push(heading);

    let visibility = if channel.is_private { "private" } else { "public" };
    lines.push(format!("Visibility: {visibility}"));

    if let Some(members) = channel.num_members {
        lines.push(format!("Members: {members}"));
    }

    if let Some(created) = channel.created
        && let Some(when) = chrono::DateTime::from_timestamp(created, 0)
    {
        lines.push(format!("Created: {}", when.format("%Y-%m-%d")));
    }

    if let Some(topic) = &channel.topic
        && !topic.value.is_empty()
    {
        lines.push(format!("Topic: {}", topic.value));
    }

    if let Some(purpose) = &channel.purpose
        && !purpose.value.is_empty()
    {
        lines.push(format!("Purpose: {}", purpose.value));
    }

    if channel.is_archived {
        lines.push("Archived: yes".to_owned());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use slacklens_slack::types::ChannelDescriptor;

    fn msg(user: Option<&str>, text: &str) -> SlackMessage {
        SlackMessage {
            ts: "1609459200.000001".into(),
            thread_ts: None,
            user: user.map(Into::into),
            bot_id: None,
            username: None,
            text: text.into(),
            reply_count: None,
        }
    }

    fn offline_client() -> SlackApiClient {
        SlackApiClient::with_base_url("xoxb-test".into(), "http://127.0.0.1:1".into())
    }

    #[tokio::test]
    async fn renders_lines_and_caches_user_lookups() {
        let mut server = mockito::Server::new_async().await;
        let alice = server
            .mock("GET", "/users.info")
            .match_query(mockito::Matcher::UrlEncoded("user".into(), "U1".into()))
            .with_body(r#"{"ok": true, "user": {"id": "U1", "name": "alice", "profile": {"display_name": "Alice"}}}"#)
            .expect(1)
            .create_async()
            .await;
        let bob = server
            .mock("GET", "/users.info")
            .match_query(mockito::Matcher::UrlEncoded("user".into(), "U2".into()))
            .with_body(r#"{"ok": true, "user": {"id": "U2", "name": "bob"}}"#)
            .expect(1)
            .create_async()
            .await;

        let api = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let messages = vec![
            msg(Some("U1"), "first"),
            msg(Some("U2"), "second"),
            msg(Some("U1"), "third"),
        ];

        let mut cache = UserNameCache::new();
        let text = render_messages(&api, &messages, &mut cache).await;

        assert_eq!(text, "[Alice] first\n[bob] second\n[Alice] third");
        alice.assert_async().await;
        bob.assert_async().await;
    }

    #[tokio::test]
    async fn failed_lookup_falls_back_to_raw_id_once() {
        let mut server = mockito::Server::new_async().await;
        let missing = server
            .mock("GET", "/users.info")
            .match_query(mockito::Matcher::UrlEncoded("user".into(), "U404".into()))
            .with_body(r#"{"ok": false, "error": "user_not_found"}"#)
            .expect(1)
            .create_async()
            .await;

        let api = SlackApiClient::with_base_url("xoxb-test".into(), server.url());
        let messages = vec![msg(Some("U404"), "hello"), msg(Some("U404"), "again")];

        let mut cache = UserNameCache::new();
        let text = render_messages(&api, &messages, &mut cache).await;

        assert_eq!(text, "[U404] hello\n[U404] again");
        missing.assert_async().await;
    }

    #[tokio::test]
    async fn bot_messages_use_username_then_bot_id() {
        let api = offline_client();
        let mut cache = UserNameCache::new();

        let mut named = msg(None, "deploy finished");
        named.username = Some("deploybot".into());
        let mut anonymous = msg(None, "ping");
        anonymous.bot_id = Some("B99".into());
        let bare = msg(None, "???");

        let text = render_messages(&api, &[named, anonymous, bare], &mut cache).await;
        assert_eq!(text, "[deploybot] deploy finished\n[B99] ping\n[unknown] ???");
    }

    #[tokio::test]
    async fn empty_message_list_renders_empty() {
        let api = offline_client();
        let mut cache = UserNameCache::new();
        let text = render_messages(&api, &[], &mut cache).await;
        assert_eq!(text, "");
    }

    #[test]
    fn channel_summary_includes_all_known_fields() {
        let channel = SlackChannel {
            id: "C123".into(),
            name: Some("general".into()),
            is_private: false,
            is_archived: false,
            is_im: false,
            created: Some(1609459200),
            num_members: Some(42),
            topic: Some(ChannelDescriptor {
                value: "Watercooler".into(),
            }),
            purpose: Some(ChannelDescriptor {
                value: "Company-wide chatter".into(),
            }),
        };

        let text = render_channel(&channel);
        assert_eq!(
            text,
            "Channel: #general (C123)\n\
             Visibility: public\n\
             Members: 42\n\
             Created: 2021-01-01\n\
             Topic: Watercooler\n\
             Purpose: Company-wide chatter"
        );
    }

    #[test]
    fn minimal_channel_renders_id_only() {
        let channel = SlackChannel {
            id: "C9".into(),
            name: None,
            is_private: true,
            is_archived: false,
            is_im: false,
            created: None,
            num_members: None,
            topic: None,
            purpose: None,
        };

        let text = render_channel(&channel);
        assert_eq!(text, "Channel: C9\nVisibility: private");
    }

    #[test]
    fn dm_and_archived_markers() {
        let channel = SlackChannel {
            id: "D42".into(),
            name: None,
            is_private: true,
            is_archived: true,
            is_im: true,
            created: None,
            num_members: None,
            topic: None,
            purpose: None,
        };

        let text = render_channel(&channel);
        assert!(text.starts_with("Direct message: D42"));
        assert!(text.ends_with("Archived: yes"));
    }

    #[test]
    fn empty_topic_is_omitted() {
        let channel = SlackChannel {
            id: "C1".into(),
            name: Some("dev".into()),
            is_private: false,
            is_archived: false,
            is_im: false,
            created: None,
            num_members: None,
            topic: Some(ChannelDescriptor { value: String::new() }),
            purpose: None,
        };

        assert!(!render_channel(&channel).contains("Topic:"));
    }
}
