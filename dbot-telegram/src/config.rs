//! Bot configuration: Telegram access, Upstash store, completion API, webhook server, logging.
//! Loaded from environment variables.

use anyhow::{Context, Result};
use llm_client::EnvLlmConfig;
use std::env;

pub const DEFAULT_WEBHOOK_PATH: &str = "/api/bot";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TELEGRAM_TOKEN (or BOT_TOKEN)
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// UPSTASH_REDIS_REST_URL
    pub upstash_url: String,
    /// UPSTASH_REDIS_REST_TOKEN
    pub upstash_token: String,
    /// MISTRAL_API_KEY, COMPLETION_BASE_URL, COMPLETION_MODEL
    pub llm: EnvLlmConfig,
    /// WEBHOOK_PATH
    pub webhook_path: String,
    /// BIND_ADDR
    pub bind_addr: String,
    /// WEBHOOK_SECRET; compared with the X-Telegram-Bot-Api-Secret-Token header when set
    pub webhook_secret: Option<String>,
    /// LOG_FILE
    pub log_file: Option<String>,
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn required(name: &str) -> Result<String> {
    optional(name).with_context(|| format!("{} not set", name))
}

impl BotConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let bot_token = optional("TELEGRAM_TOKEN")
            .or_else(|| optional("BOT_TOKEN"))
            .context("TELEGRAM_TOKEN not set")?;
        let upstash_url = required("UPSTASH_REDIS_REST_URL")?;
        let upstash_token = required("UPSTASH_REDIS_REST_TOKEN")?;
        let llm = EnvLlmConfig::from_env()?;
        let telegram_api_url = optional("TELEGRAM_API_URL").or_else(|| optional("TELOXIDE_API_URL"));
        let webhook_path =
            optional("WEBHOOK_PATH").unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string());
        let bind_addr = optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            upstash_url,
            upstash_token,
            llm,
            webhook_path,
            bind_addr,
            webhook_secret: optional("WEBHOOK_SECRET"),
            log_file: optional("LOG_FILE"),
        })
    }

    /// Validate URLs and the webhook path.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.upstash_url).is_err() {
            anyhow::bail!("UPSTASH_REDIS_REST_URL is not a valid URL: {}", self.upstash_url);
        }
        if reqwest::Url::parse(&self.llm.base_url).is_err() {
            anyhow::bail!("COMPLETION_BASE_URL is not a valid URL: {}", self.llm.base_url);
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if !self.webhook_path.starts_with('/') {
            anyhow::bail!("WEBHOOK_PATH must start with '/': {}", self.webhook_path);
        }
        Ok(())
    }
}
