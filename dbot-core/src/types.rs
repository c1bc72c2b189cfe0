//! Core types: user, chat, the classified inbound update, and handler response.

use serde::{Deserialize, Serialize};

/// User identity (id, username, display name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

/// Chat identity. Replies are addressed to a chat; `chat_type` is logged with each dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Who sent an update and where the reply goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub user: User,
    pub chat: Chat,
}

/// One inbound update, classified once at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatUpdate {
    /// `/start` command.
    SessionStart(Origin),
    /// Any text that is not `/start` or `/stats`, including unknown commands.
    TextMessage { origin: Origin, text: String },
    /// `/stats` command.
    StatsQuery(Origin),
    /// Everything else: non-text messages, other update kinds, updates without a sender.
    Unhandled,
}

impl ChatUpdate {
    /// Short kind name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatUpdate::SessionStart(_) => "session_start",
            ChatUpdate::TextMessage { .. } => "text_message",
            ChatUpdate::StatsQuery(_) => "stats_query",
            ChatUpdate::Unhandled => "unhandled",
        }
    }

    /// Sender and chat, when the update has one.
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            ChatUpdate::SessionStart(origin) | ChatUpdate::StatsQuery(origin) => Some(origin),
            ChatUpdate::TextMessage { origin, .. } => Some(origin),
            ChatUpdate::Unhandled => None,
        }
    }
}

/// Result of dispatching one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// A reply was sent; carries the reply text.
    Reply(String),
    /// The update was handled but nothing was sent (e.g. stats for an unknown user).
    Stop,
    /// The update kind has no handler.
    Ignore,
}

/// Converts a transport-specific update into a [`ChatUpdate`].
pub trait ToChatUpdate {
    fn to_chat_update(&self) -> ChatUpdate;
}
