//! Routes a classified update to its flow.

use dbot_core::{Bot, ChatUpdate, HandlerResponse};
use llm_client::LlmClient;
use std::sync::Arc;
use storage::SessionStore;
use tracing::{debug, info, instrument};

use crate::error::FlowError;
use crate::start_handler::StartHandler;
use crate::stats_handler::StatsHandler;
use crate::text_handler::TextHandler;

/// Holds one handler per update kind. Built once at startup from injected client handles;
/// keeps no per-request state.
#[derive(Clone)]
pub struct UpdateDispatcher {
    start: StartHandler,
    text: TextHandler,
    stats: StatsHandler,
}

impl UpdateDispatcher {
    pub fn new(bot: Arc<dyn Bot>, sessions: SessionStore, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            start: StartHandler::new(bot.clone(), sessions.clone()),
            text: TextHandler::new(bot.clone(), sessions.clone(), llm),
            stats: StatsHandler::new(bot, sessions),
        }
    }

    /// Runs exactly one flow for `update`. [`ChatUpdate::Unhandled`] does nothing and returns
    /// [`HandlerResponse::Ignore`].
    #[instrument(
        skip(self, update),
        fields(
            kind = update.kind(),
            chat_type = update.origin().map(|o| o.chat.chat_type.as_str())
        )
    )]
    pub async fn dispatch(&self, update: &ChatUpdate) -> Result<HandlerResponse, FlowError> {
        let response = match update {
            ChatUpdate::SessionStart(origin) => self.start.handle(origin).await?,
            ChatUpdate::TextMessage { origin, text } => self.text.handle(origin, text).await?,
            ChatUpdate::StatsQuery(origin) => self.stats.handle(origin).await?,
            ChatUpdate::Unhandled => {
                debug!("step: update ignored");
                return Ok(HandlerResponse::Ignore);
            }
        };
        info!(kind = update.kind(), response = ?response, "step: update dispatched");
        Ok(response)
    }
}
