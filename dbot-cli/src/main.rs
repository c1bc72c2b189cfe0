//! dbot: serve the Telegram webhook, or register / remove it. Config from env (and `.env`).

use anyhow::Result;
use clap::Parser;
use dbot_cli::{delete_webhook, serve, set_webhook, Cli, Commands};
use dbot_core::init_tracing;
use dbot_telegram::BotConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BotConfig::from_env()?;
    config.validate()?;
    init_tracing(config.log_file.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => serve(config, bind).await,
        Commands::SetWebhook { url } => set_webhook(&config, &url).await,
        Commands::DeleteWebhook => delete_webhook(&config).await,
    }
}
