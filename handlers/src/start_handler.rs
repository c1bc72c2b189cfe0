//! `/start`: greet, then upsert the sender's profile.

use chrono::{DateTime, Utc};
use dbot_core::{Bot, HandlerResponse, Origin};
use std::sync::Arc;
use storage::{SessionStore, UserProfile};
use tracing::{error, info, instrument};

use crate::error::FlowError;
use crate::replies::GREETING;

/// Sends [`GREETING`] and overwrites the sender's [`UserProfile`].
#[derive(Clone)]
pub struct StartHandler {
    bot: Arc<dyn Bot>,
    sessions: SessionStore,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: SessionStore) -> Self {
        Self { bot, sessions }
    }

    pub async fn handle(&self, origin: &Origin) -> Result<HandlerResponse, FlowError> {
        self.handle_at(origin, Utc::now()).await
    }

    /// The greeting and the profile write are independent: both are attempted and the first
    /// failure (if any) is returned. Neither is rolled back.
    #[instrument(skip(self, origin), fields(user_id = origin.user.id, chat_id = origin.chat.id))]
    pub async fn handle_at(
        &self,
        origin: &Origin,
        now: DateTime<Utc>,
    ) -> Result<HandlerResponse, FlowError> {
        info!(user_id = origin.user.id, "step: StartHandler sending greeting");
        let sent = self.bot.send_message(&origin.chat, GREETING).await;
        if let Err(ref e) = sent {
            error!(error = %e, user_id = origin.user.id, "Failed to send greeting");
        }

        let profile = UserProfile::new(
            origin.user.id,
            origin.user.username.clone(),
            origin.user.first_name.clone(),
            now,
        );
        let saved = self.sessions.save_profile(&profile).await;
        if let Err(ref e) = saved {
            error!(error = %e, user_id = origin.user.id, "Failed to save profile");
        }

        sent?;
        saved?;
        info!(user_id = origin.user.id, "step: StartHandler done");
        Ok(HandlerResponse::Reply(GREETING.to_string()))
    }
}
