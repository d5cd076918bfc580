//! # slacklens-slack
//!
//! Slack Web API client for the slacklens tool server.
//!
//! Covers only the read endpoints the tools need:
//!
//! - **[`api`]** -- [`SlackApiClient`] with typed request methods
//! - **[`types`]** -- message / user / channel payloads and response
//!   envelopes

pub mod api;
pub mod types;

pub use api::SlackApiClient;
pub use types::{SlackChannel, SlackMessage, SlackUser};
