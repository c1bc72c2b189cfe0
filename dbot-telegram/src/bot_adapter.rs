//! Reply sender backed by the Telegram Bot API.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Result};
use teloxide::{prelude::*, types::ChatId};
use tracing::error;

use crate::config::BotConfig;

/// Sends replies through teloxide. Cloning shares the underlying HTTP client.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Token from `TELEGRAM_TOKEN`; `TELEGRAM_API_URL` points at a self-hosted Bot API server.
    pub fn from_config(config: &BotConfig) -> anyhow::Result<Self> {
        let mut bot = teloxide::Bot::new(&config.bot_token);
        if let Some(ref url) = config.telegram_api_url {
            bot = bot.set_api_url(reqwest::Url::parse(url)?);
        }
        Ok(Self::new(bot))
    }

    /// Raw teloxide handle, used for `getMe` and webhook registration.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        match self.bot.send_message(ChatId(chat.id), text.to_string()).await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!(error = %e, chat_id = chat.id, "sendMessage failed");
                Err(DbotError::Bot(e.to_string()))
            }
        }
    }
}
