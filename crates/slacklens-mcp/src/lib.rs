//! # slacklens-mcp
//!
//! MCP hosting surface for the slacklens tools.
//!
//! Speaks JSON-RPC 2.0 over newline-delimited JSON streams:
//!
//! - **[`protocol`]** -- the MCP wire types ([`ToolDefinition`],
//!   [`CallToolResult`])
//! - **[`server`]** -- [`McpServerShell`], the request loop, generic
//!   over its reader and writer so tests can drive it from memory

pub mod protocol;
pub mod server;

pub use protocol::{CallToolResult, ContentBlock, ToolDefinition};
pub use server::McpServerShell;
