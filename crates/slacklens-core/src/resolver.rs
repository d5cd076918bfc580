//! Slack link resolution.
//!
//! Turns a shareable Slack URL into the identifier triple the Web API
//! wants: channel ID, message timestamp, and thread root timestamp.
//! Three link shapes are recognized, tried in a fixed order:
//!
//! 1. Archive message: `/archives/<ID>/p<digits>` with an optional
//!    `thread_ts` query parameter.
//! 2. Client thread: `/client/<TEAM>/<ID>/thread/<ANY>-<seconds.micros>`.
//! 3. Bare channel: `/archives/<ID>`.
//!
//! Resolution is a pure function of the input string: no network, no
//! state, and no panics -- any string that matches nothing is simply
//! unresolvable.

use serde::{Deserialize, Serialize};
use url::Url;

/// Host suffix that marks a link as belonging to Slack.
const SLACK_DOMAIN: &str = "slack.com";

/// The tenant-agnostic host label used by the web client
/// (`app.slack.com`), which carries no workspace information.
const TENANT_AGNOSTIC_LABEL: &str = "app";

/// The identifier triple recovered from a Slack link.
///
/// Constructed once per incoming link and consumed immediately to build
/// the downstream API request. Field names are the wire contract: the
/// serialized form uses `workspace`, `channelId`, `messageTs`, `threadTs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfo {
    /// Workspace subdomain label. Absent when the link uses the
    /// tenant-agnostic `app.` host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,

    /// Channel ID, casing preserved exactly as it appeared in the URL.
    pub channel_id: String,

    /// Message timestamp in canonical `<seconds>.<microseconds>` form,
    /// or empty when the link names a channel only.
    pub message_ts: String,

    /// Thread root timestamp. Absent only for bare channel links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
}

/// The two negative outcomes of resolution.
///
/// Both are ordinary values, never panics: the resolver is total over
/// arbitrary input strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The host is not `slack.com` or a subdomain of it.
    #[error("not a Slack URL")]
    NotSlackUrl,

    /// A Slack URL (or unparseable string) matching none of the known
    /// link shapes.
    #[error("unrecognized Slack link format")]
    UnresolvableShape,
}

/// Whether a string is a link into Slack.
///
/// Parses as a generic URL; malformed input is `false`, never an error.
/// True iff the host is the bare Slack domain or any subdomain of it.
pub fn is_slack_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    host == SLACK_DOMAIN || host.ends_with(&format!(".{SLACK_DOMAIN}"))
}

/// Resolve a Slack link into a [`LinkInfo`], or `None` when the string
/// parses as no known shape.
///
/// The caller is assumed to have passed [`is_slack_url`] already (or to
/// not care about the distinction); the host is only consulted for the
/// workspace label, not re-validated.
pub fn resolve_link(url: &str) -> Option<LinkInfo> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let workspace = workspace_from_host(host);

    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        // Archive message: /archives/<ID>/p<digits>
        [keyword, channel, ts_segment]
            if keyword.eq_ignore_ascii_case("archives") && is_channel_id(channel) =>
        {
            let digits = archive_ts_digits(ts_segment)?;
            let message_ts = normalize_ts(digits);
            // Without an explicit thread parameter, the message is treated
            // as its own thread root.
            let thread_ts = thread_ts_param(&parsed).unwrap_or_else(|| message_ts.clone());
            Some(LinkInfo {
                workspace,
                channel_id: (*channel).to_owned(),
                message_ts,
                thread_ts: Some(thread_ts),
            })
        }

        // Client thread: /client/<TEAM>/<ID>/thread/<ANY>-<seconds.micros>
        [keyword, _team, channel, thread_keyword, tail]
            if keyword.eq_ignore_ascii_case("client")
                && thread_keyword.eq_ignore_ascii_case("thread")
                && is_channel_id(channel) =>
        {
            let ts = thread_tail_ts(tail)?;
            Some(LinkInfo {
                workspace,
                channel_id: (*channel).to_owned(),
                message_ts: ts.to_owned(),
                thread_ts: Some(ts.to_owned()),
            })
        }

        // Bare channel: /archives/<ID>
        [keyword, channel] if keyword.eq_ignore_ascii_case("archives") && is_channel_id(channel) => {
            Some(LinkInfo {
                workspace,
                channel_id: (*channel).to_owned(),
                message_ts: String::new(),
                thread_ts: None,
            })
        }

        _ => None,
    }
}

/// Gate and resolve in one step, distinguishing the two failure kinds.
pub fn resolve_checked(url: &str) -> Result<LinkInfo, ResolveError> {
    if !is_slack_url(url) {
        return Err(ResolveError::NotSlackUrl);
    }
    resolve_link(url).ok_or(ResolveError::UnresolvableShape)
}

/// Convert a share-link timestamp to canonical
/// `<seconds>.<microseconds>` form.
///
/// Strips a leading `p`/`P` if one is still attached, then splits a
/// 16-digit run after the tenth digit. Anything else -- already-dotted
/// values, other lengths, non-digits -- passes through unchanged.
pub fn normalize_ts(raw: &str) -> String {
    let digits = raw.strip_prefix(['p', 'P']).unwrap_or(raw);
    if digits.len() == 16 && digits.bytes().all(|b| b.is_ascii_digit()) {
        let (seconds, micros) = digits.split_at(10);
        return format!("{seconds}.{micros}");
    }
    digits.to_owned()
}

/// Workspace label from the host: the first subdomain label, unless the
/// link uses the tenant-agnostic client host.
fn workspace_from_host(host: &str) -> Option<String> {
    let label = host.split('.').next()?;
    if label == TENANT_AGNOSTIC_LABEL {
        None
    } else {
        Some(label.to_owned())
    }
}

/// Channel and team IDs are opaque alphanumeric runs. Matching is
/// case-insensitive by accepting both cases; the caller keeps the
/// original casing.
fn is_channel_id(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// The digit run of an archive timestamp segment (`p<digits>`), or
/// `None` when the segment is not one.
fn archive_ts_digits(segment: &str) -> Option<&str> {
    let digits = segment.strip_prefix(['p', 'P'])?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits)
}

/// The trailing canonical timestamp of a client-thread tail segment
/// (`<ANY>-<seconds.micros>`). The prefix before the last dash is
/// discarded.
fn thread_tail_ts(segment: &str) -> Option<&str> {
    let (_, ts) = segment.rsplit_once('-')?;
    let (seconds, micros) = ts.split_once('.')?;
    if seconds.is_empty() || micros.is_empty() {
        return None;
    }
    if !seconds.bytes().all(|b| b.is_ascii_digit()) || !micros.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(ts)
}

/// First `thread_ts` query parameter, if present and non-empty. Taken
/// verbatim: query values are assumed already canonical.
fn thread_ts_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find_map(|(key, value)| (key == "thread_ts").then(|| value.into_owned()))
        .filter(|value| !value.is_empty())
}
