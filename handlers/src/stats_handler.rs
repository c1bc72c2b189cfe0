//! `/stats`: reply with the stored profile summary, or stay silent if there is none.

use dbot_core::{Bot, HandlerResponse, Origin};
use std::sync::Arc;
use storage::SessionStore;
use tracing::{info, instrument};

use crate::error::FlowError;
use crate::replies::format_stats;

#[derive(Clone)]
pub struct StatsHandler {
    bot: Arc<dyn Bot>,
    sessions: SessionStore,
}

impl StatsHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: SessionStore) -> Self {
        Self { bot, sessions }
    }

    #[instrument(skip(self, origin), fields(user_id = origin.user.id, chat_id = origin.chat.id))]
    pub async fn handle(&self, origin: &Origin) -> Result<HandlerResponse, FlowError> {
        match self.sessions.load_profile(origin.user.id).await? {
            Some(profile) => {
                let text = format_stats(&profile);
                self.bot.send_message(&origin.chat, &text).await?;
                info!(user_id = origin.user.id, "step: StatsHandler replied");
                Ok(HandlerResponse::Reply(text))
            }
            None => {
                info!(
                    user_id = origin.user.id,
                    "step: StatsHandler no profile stored, nothing sent"
                );
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
