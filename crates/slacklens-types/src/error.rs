//! Error types for the slacklens tool server.
//!
//! Provides [`SlacklensError`] as the top-level error type and
//! [`SlackError`] for Slack Web API failures. Both are non-exhaustive to
//! allow future extension without breaking downstream.

use thiserror::Error;

/// Top-level error type for the slacklens tool server.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SlacklensError {
    /// Configuration is malformed or semantically invalid.
    #[error("invalid config: {reason}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A Slack API layer error bubbled up.
    #[error("slack error: {0}")]
    Slack(#[from] SlackError),
}

/// Slack Web API error type.
///
/// Used by the API client to report transport failures and `ok: false`
/// responses. Variants carry the method name so callers can tell which
/// endpoint failed without extra context.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SlackError {
    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The platform answered with `ok: false` and an error code.
    #[error("api error: {0}")]
    Api(String),

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response was `ok: true` but the expected payload was missing.
    #[error("missing payload: {0}")]
    MissingPayload(String),
}

/// A convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SlacklensError>;
