//! Wires config into the running components.

use anyhow::{Context, Result};
use dbot_telegram::{router, BotConfig, TelegramBotAdapter, WebhookState};
use handlers::UpdateDispatcher;
use llm_client::OpenAILlmClient;
use std::sync::Arc;
use storage::{SessionStore, UpstashStore};
use teloxide::prelude::*;
use tokio::net::TcpListener;
use tracing::info;

use crate::cli::webhook_url;

/// Builds the dispatcher over the Upstash store, the completion client and `bot`.
pub fn build_dispatcher(config: &BotConfig, bot: TelegramBotAdapter) -> UpdateDispatcher {
    let kv = UpstashStore::new(config.upstash_url.clone(), config.upstash_token.clone());
    let sessions = SessionStore::new(Arc::new(kv));
    let llm = OpenAILlmClient::from_config(&config.llm);
    info!(
        base_url = %config.llm.base_url,
        model = %llm.model(),
        "step: completion client ready"
    );
    UpdateDispatcher::new(Arc::new(bot), sessions, Arc::new(llm))
}

/// Runs the webhook server until it fails.
pub async fn serve(config: BotConfig, bind: Option<String>) -> Result<()> {
    let bot = TelegramBotAdapter::from_config(&config)?;
    let me = bot.inner().get_me().await.context("Telegram getMe failed")?;
    let bot_username = me.user.username.clone();
    info!(
        bot_id = me.user.id.0,
        bot_username = ?bot_username,
        "step: bot identity resolved"
    );

    let dispatcher = build_dispatcher(&config, bot);
    let state = WebhookState::new(dispatcher)
        .with_secret(config.webhook_secret.clone())
        .with_bot_username(bot_username);
    let app = router(state, &config.webhook_path);

    let addr = bind.unwrap_or_else(|| config.bind_addr.clone());
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(path = %config.webhook_path, "step: webhook route mounted");
    dbot_telegram::serve(listener, app).await
}

pub async fn set_webhook(config: &BotConfig, base_url: &str) -> Result<()> {
    let bot = TelegramBotAdapter::from_config(config)?;
    let url = webhook_url(base_url, &config.webhook_path);
    let parsed = reqwest::Url::parse(&url).with_context(|| format!("Invalid webhook URL: {}", url))?;

    let mut request = bot.inner().set_webhook(parsed);
    if let Some(ref secret) = config.webhook_secret {
        request = request.secret_token(secret.clone());
    }
    request.await.context("Telegram setWebhook failed")?;

    info!(url = %url, secret = config.webhook_secret.is_some(), "Webhook registered");
    println!("Webhook set: {}", url);
    Ok(())
}

pub async fn delete_webhook(config: &BotConfig) -> Result<()> {
    let bot = TelegramBotAdapter::from_config(config)?;
    bot.inner()
        .delete_webhook()
        .await
        .context("Telegram deleteWebhook failed")?;
    info!("Webhook deleted");
    println!("Webhook deleted");
    Ok(())
}
