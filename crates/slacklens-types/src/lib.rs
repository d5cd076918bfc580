//! # slacklens-types
//!
//! Shared type definitions for the slacklens tool server.
//!
//! This crate sits at the bottom of the dependency graph and contains:
//!
//! - **[`error`]** -- [`SlacklensError`] and [`SlackError`] error types
//! - **[`config`]** -- Configuration schema and file discovery
//! - **[`secret`]** -- [`SecretString`] wrapper for the bot token

pub mod config;
pub mod error;
pub mod secret;

pub use config::{Config, ServerConfig, SlackConfig};
pub use error::{Result, SlackError, SlacklensError};
pub use secret::SecretString;
