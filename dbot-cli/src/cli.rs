//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dbot")]
#[command(about = "Telegram webhook bot backed by Upstash and a chat-completion API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the webhook HTTP server (config from env).
    Serve {
        /// Listen address; overrides BIND_ADDR.
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Register `<url><WEBHOOK_PATH>` with Telegram.
    SetWebhook {
        /// Public base URL of this server, e.g. https://bot.example.com
        #[arg(short, long)]
        url: String,
    },
    /// Remove the registered webhook.
    DeleteWebhook,
}

/// Joins the public base URL and the webhook path without doubling the slash.
pub fn webhook_url(base_url: &str, webhook_path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), webhook_path)
}
