//! Plain text: record it, ask the completion API, record and relay the answer.

use dbot_core::{Bot, HandlerResponse, Origin};
use llm_client::LlmClient;
use std::sync::Arc;
use storage::SessionStore;
use tracing::{error, info, instrument, warn};

use crate::error::FlowError;
use crate::replies::COMPLETION_FAILED;

/// Text message flow.
///
/// 1. push `"User: <text>"` and trim history to the newest entries;
/// 2. one completion request with `text` as the only message (history is not sent);
/// 3. on success push `"Bot: <reply>"` (untrimmed) and send the reply;
/// 4. on a non-2xx or transport failure send [`COMPLETION_FAILED`] and write nothing more;
///    a 2xx without a usable reply is returned as [`FlowError::Completion`].
#[derive(Clone)]
pub struct TextHandler {
    bot: Arc<dyn Bot>,
    sessions: SessionStore,
    llm: Arc<dyn LlmClient>,
}

impl TextHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: SessionStore, llm: Arc<dyn LlmClient>) -> Self {
        Self { bot, sessions, llm }
    }

    #[instrument(skip(self, origin, text), fields(user_id = origin.user.id, chat_id = origin.chat.id))]
    pub async fn handle(&self, origin: &Origin, text: &str) -> Result<HandlerResponse, FlowError> {
        let user_id = origin.user.id;
        info!(user_id, text_len = text.len(), "step: TextHandler received text");

        self.sessions.push_user_message(user_id, text).await?;

        match self.llm.complete(text).await {
            Ok(reply) => {
                info!(user_id, reply_len = reply.len(), "step: TextHandler completion ok");
                self.sessions.push_bot_message(user_id, &reply).await?;
                self.bot.send_message(&origin.chat, &reply).await?;
                Ok(HandlerResponse::Reply(reply))
            }
            Err(e) if e.is_unsuccessful_response() => {
                warn!(error = %e, user_id, "Completion failed, sending warning");
                self.bot.send_message(&origin.chat, COMPLETION_FAILED).await?;
                Ok(HandlerResponse::Reply(COMPLETION_FAILED.to_string()))
            }
            Err(e) => {
                error!(error = %e, user_id, "Completion returned no usable reply");
                Err(FlowError::Completion(e))
            }
        }
    }
}
