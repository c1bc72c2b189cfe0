//! # dbot-telegram
//!
//! Telegram transport: update classification, [`dbot_core::Bot`] implementation, env config,
//! and the axum webhook server. No persistence or completion logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod webhook;

pub use adapters::{classify_text, TelegramUpdateWrapper, TelegramUserWrapper, TextIntent};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{BotConfig, DEFAULT_BIND_ADDR, DEFAULT_WEBHOOK_PATH};
pub use webhook::{router, serve, WebhookState, SECRET_TOKEN_HEADER};
