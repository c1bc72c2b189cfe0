//! Session records on top of a [`KvStore`]: user profiles and the bounded chat history.

use crate::error::StorageError;
use crate::kv_store::KvStore;
use crate::models::{chat_key, user_key, HistoryRole, UserProfile, HISTORY_LIMIT};
use std::sync::Arc;
use tracing::{info, instrument};

/// Reads and writes [`UserProfile`] and chat-history records.
#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KvStore>,
}

impl SessionStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Replaces the profile stored for `profile.id`.
    #[instrument(skip(self, profile), fields(user_id = profile.id))]
    pub async fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let json = serde_json::to_string(profile)?;
        self.kv.set(&user_key(profile.id), &json).await?;
        info!(user_id = profile.id, "step: profile saved");
        Ok(())
    }

    /// Returns the stored profile, or `None` if the user never sent `/start`.
    #[instrument(skip(self))]
    pub async fn load_profile(&self, user_id: i64) -> Result<Option<UserProfile>, StorageError> {
        match self.kv.get(&user_key(user_id)).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Pushes `"User: <text>"` and trims the history to the [`HISTORY_LIMIT`] newest entries.
    #[instrument(skip(self, text))]
    pub async fn push_user_message(&self, user_id: i64, text: &str) -> Result<(), StorageError> {
        let key = chat_key(user_id);
        let len = self.kv.lpush(&key, &HistoryRole::User.tag(text)).await?;
        self.kv.ltrim(&key, 0, HISTORY_LIMIT as i64 - 1).await?;
        info!(
            user_id,
            pushed_len = len,
            kept = len.min(HISTORY_LIMIT as u64),
            "step: user message pushed and history trimmed"
        );
        Ok(())
    }

    /// Pushes `"Bot: <text>"`. No trim follows, so the list may hold one entry over the limit
    /// until the next user message.
    #[instrument(skip(self, text))]
    pub async fn push_bot_message(&self, user_id: i64, text: &str) -> Result<(), StorageError> {
        let len = self
            .kv
            .lpush(&chat_key(user_id), &HistoryRole::Bot.tag(text))
            .await?;
        info!(user_id, history_len = len, "step: bot reply pushed");
        Ok(())
    }

    /// Full stored history, newest first.
    pub async fn history(&self, user_id: i64) -> Result<Vec<String>, StorageError> {
        self.kv.lrange(&chat_key(user_id), 0, -1).await
    }
}
