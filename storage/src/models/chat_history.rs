//! Per-user chat history: a newest-first list under `chat:<id>`.

/// Entries kept after each user-message push.
pub const HISTORY_LIMIT: usize = 10;

/// Key of the history list for `user_id`.
pub fn chat_key(user_id: i64) -> String {
    format!("chat:{}", user_id)
}

/// Author of a history entry; rendered as the entry's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRole {
    User,
    Bot,
}

impl HistoryRole {
    pub fn prefix(&self) -> &'static str {
        match self {
            HistoryRole::User => "User",
            HistoryRole::Bot => "Bot",
        }
    }

    /// `"User: <text>"` / `"Bot: <text>"`.
    pub fn tag(&self, text: &str) -> String {
        format!("{}: {}", self.prefix(), text)
    }
}
