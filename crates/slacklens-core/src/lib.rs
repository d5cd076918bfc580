//! # slacklens-core
//!
//! Link resolution and Slack read tools.
//!
//! The heart of this crate is [`resolver`], a pure function from an
//! arbitrary link string to API identifiers. Everything else consumes its
//! output:
//!
//! - **[`resolver`]** -- [`is_slack_url`], [`resolve_link`] and the
//!   [`LinkInfo`] triple they produce
//! - **[`render`]** -- thread and channel rendering with a per-request
//!   user-name cache
//! - **[`tools`]** -- the [`Tool`](tools::registry::Tool) trait, the
//!   registry, and the three Slack tools served over MCP

pub mod render;
pub mod resolver;
pub mod tools;

pub use resolver::{LinkInfo, ResolveError, is_slack_url, resolve_checked, resolve_link};
