//! # dbot-core
//!
//! Core types and traits for the webhook bot: [`Bot`], [`ChatUpdate`], user and chat identity,
//! [`HandlerResponse`], and tracing initialization. Transport-agnostic; used by handlers and dbot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, ChatUpdate, HandlerResponse, Origin, ToChatUpdate, User};
