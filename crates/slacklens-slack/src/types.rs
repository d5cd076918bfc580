//! Slack Web API payload types.
//!
//! Serde models for the read endpoints: message objects from
//! `conversations.replies` / `conversations.history`, user objects from
//! `users.info`, and channel objects from `conversations.info`. Every
//! envelope carries `ok` and `error`, which the client checks before the
//! payload is touched.

use serde::Deserialize;

/// A message as returned by `conversations.replies` or
/// `conversations.history`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackMessage {
    /// Message timestamp in canonical `<seconds>.<microseconds>` form.
    pub ts: String,

    /// Root timestamp when the message belongs to a thread.
    pub thread_ts: Option<String>,

    /// User ID of the author. Absent for some bot and system messages.
    pub user: Option<String>,

    /// Bot ID when the message was posted by a bot integration.
    pub bot_id: Option<String>,

    /// Bot display name, set on some bot messages.
    pub username: Option<String>,

    /// Message text in mrkdwn source form.
    #[serde(default)]
    pub text: String,

    /// Reply count, set on thread root messages.
    pub reply_count: Option<u32>,
}

/// A user as returned by `users.info`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackUser {
    /// User ID (`U...` / `W...`).
    pub id: String,

    /// Login handle.
    pub name: Option<String>,

    /// Full name.
    pub real_name: Option<String>,

    /// Profile block with the user-facing display name.
    pub profile: Option<SlackUserProfile>,

    /// Whether this user is a bot user.
    #[serde(default)]
    pub is_bot: bool,
}

/// The `profile` block of a user object.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackUserProfile {
    /// Display name chosen by the user. Often empty.
    pub display_name: Option<String>,

    /// Full name as entered in the profile.
    pub real_name: Option<String>,
}

impl SlackUser {
    /// Best human-readable name for rendering: profile display name,
    /// then profile real name, then top-level real name, then handle,
    /// falling back to the raw ID.
    pub fn label(&self) -> &str {
        if let Some(profile) = &self.profile {
            if let Some(name) = &profile.display_name
                && !name.is_empty()
            {
                return name;
            }
            if let Some(name) = &profile.real_name
                && !name.is_empty()
            {
                return name;
            }
        }
        if let Some(name) = &self.real_name
            && !name.is_empty()
        {
            return name;
        }
        if let Some(name) = &self.name
            && !name.is_empty()
        {
            return name;
        }
        &self.id
    }
}

/// A channel as returned by `conversations.info`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackChannel {
    /// Channel ID (`C...` / `D...` / `G...`).
    pub id: String,

    /// Channel name without the leading `#`. Absent for DMs.
    pub name: Option<String>,

    /// Whether the channel is private.
    #[serde(default)]
    pub is_private: bool,

    /// Whether the channel has been archived.
    #[serde(default)]
    pub is_archived: bool,

    /// Whether this conversation is a direct message.
    #[serde(default)]
    pub is_im: bool,

    /// Creation time as a Unix epoch in seconds.
    pub created: Option<i64>,

    /// Member count, present for regular channels.
    pub num_members: Option<u64>,

    /// Channel topic.
    pub topic: Option<ChannelDescriptor>,

    /// Channel purpose.
    pub purpose: Option<ChannelDescriptor>,
}

/// Wrapper object Slack uses for both `topic` and `purpose`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelDescriptor {
    /// The text value. Empty string when unset.
    #[serde(default)]
    pub value: String,
}

// ── Response envelopes ───────────────────────────────────────────────────

/// Response from `conversations.replies` and `conversations.history`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationsMessagesResponse {
    /// Whether the API call succeeded.
    pub ok: bool,

    /// The fetched messages.
    pub messages: Option<Vec<SlackMessage>>,

    /// Whether more messages exist beyond this page.
    pub has_more: Option<bool>,

    /// Error code if `ok` is `false`.
    pub error: Option<String>,
}

/// Response from `conversations.info`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationsInfoResponse {
    /// Whether the API call succeeded.
    pub ok: bool,

    /// The channel object.
    pub channel: Option<SlackChannel>,

    /// Error code if `ok` is `false`.
    pub error: Option<String>,
}

/// Response from `users.info`.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersInfoResponse {
    /// Whether the API call succeeded.
    pub ok: bool,

    /// The user object.
    pub user: Option<SlackUser>,

    /// Error code if `ok` is `false`.
    pub error: Option<String>,
}
