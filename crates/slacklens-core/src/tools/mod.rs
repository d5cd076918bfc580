//! Tool implementations and the registry that dispatches them.
//!
//! Three tools are exposed:
//!
//! - **`slack_resolve_link`** ([`resolve_link`]): pure link resolution,
//!   no network.
//! - **`slack_read_thread`** ([`read_thread`]): fetch and render the
//!   thread or message a link points at.
//! - **`slack_channel_info`** ([`channel_info`]): fetch and render
//!   channel metadata.
//!
//! Hosting surfaces hold a [`ToolRegistry`] and dispatch by name.

pub mod channel_info;
pub mod read_thread;
pub mod registry;
pub mod resolve_link;

use std::sync::Arc;

use slacklens_slack::SlackApiClient;

pub use channel_info::ChannelInfoTool;
pub use read_thread::ReadThreadTool;
pub use registry::{Tool, ToolError, ToolRegistry};
pub use resolve_link::ResolveLinkTool;

/// Register all built-in tools with the given registry.
///
/// `fetch_limit` caps how many messages a single thread fetch returns.
pub fn register_all(registry: &mut ToolRegistry, api: Arc<SlackApiClient>, fetch_limit: u32) {
    registry.register(Arc::new(ResolveLinkTool));
    registry.register(Arc::new(ReadThreadTool::new(api.clone(), fetch_limit)));
    registry.register(Arc::new(ChannelInfoTool::new(api)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_all_registers_every_tool() {
        let api = Arc::new(SlackApiClient::with_base_url(
            "xoxb-test".into(),
            "http://127.0.0.1:1".into(),
        ));
        let mut registry = ToolRegistry::new();
        register_all(&mut registry, api, 200);

        assert_eq!(
            registry.list(),
            vec![
                "slack_channel_info",
                "slack_read_thread",
                "slack_resolve_link"
            ]
        );
    }
}
