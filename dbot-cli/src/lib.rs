//! # dbot-cli
//!
//! Argument parsing and process wiring for the `dbot` binary.

pub mod app;
pub mod cli;

pub use app::{build_dispatcher, delete_webhook, serve, set_webhook};
pub use cli::{webhook_url, Cli, Commands};
