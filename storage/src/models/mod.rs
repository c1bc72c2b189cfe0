mod chat_history;
mod user_profile;

pub use chat_history::{chat_key, HistoryRole, HISTORY_LIMIT};
pub use user_profile::{user_key, UserProfile};
