//! Adapters from Telegram (teloxide) types to dbot_core types.
//! The whole update is classified here once; handlers never see teloxide types.

use dbot_core::{Chat, ChatUpdate, Origin, ToChatUpdate, User};
use teloxide::types::{Message, Update, UpdateKind};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
        }
    }
}

/// What a text message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextIntent {
    Start,
    Stats,
    Plain,
}

/// Classifies message text by its leading command token.
///
/// `/start` and `/stats` are recognized with an optional payload and an optional `@bot` suffix.
/// When `bot_username` is known, a command addressed to a different bot is plain text.
/// Anything else, including unknown commands, is plain text.
pub fn classify_text(text: &str, bot_username: Option<&str>) -> TextIntent {
    let token = match text.split_whitespace().next() {
        Some(t) if t.starts_with('/') => &t[1..],
        _ => return TextIntent::Plain,
    };
    let (name, mention) = match token.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (token, None),
    };
    if let (Some(mention), Some(me)) = (mention, bot_username) {
        if !mention.eq_ignore_ascii_case(me) {
            return TextIntent::Plain;
        }
    }
    match name {
        "start" => TextIntent::Start,
        "stats" => TextIntent::Stats,
        _ => TextIntent::Plain,
    }
}

fn chat_type(message: &Message) -> &'static str {
    if message.chat.is_private() {
        "private"
    } else if message.chat.is_supergroup() {
        "supergroup"
    } else if message.chat.is_group() {
        "group"
    } else {
        "channel"
    }
}

/// Wraps a teloxide Update for conversion to [`ChatUpdate`].
pub struct TelegramUpdateWrapper<'a> {
    update: &'a Update,
    bot_username: Option<&'a str>,
}

impl<'a> TelegramUpdateWrapper<'a> {
    pub fn new(update: &'a Update) -> Self {
        Self {
            update,
            bot_username: None,
        }
    }

    /// Commands addressed as `/cmd@other_bot` are then treated as plain text.
    pub fn with_bot_username(mut self, bot_username: Option<&'a str>) -> Self {
        self.bot_username = bot_username;
        self
    }

    fn message_update(&self, message: &Message) -> ChatUpdate {
        let (Some(from), Some(text)) = (message.from.as_ref(), message.text()) else {
            return ChatUpdate::Unhandled;
        };
        let origin = Origin {
            user: TelegramUserWrapper(from).to_core(),
            chat: Chat {
                id: message.chat.id.0,
                chat_type: chat_type(message).to_string(),
            },
        };
        match classify_text(text, self.bot_username) {
            TextIntent::Start => ChatUpdate::SessionStart(origin),
            TextIntent::Stats => ChatUpdate::StatsQuery(origin),
            TextIntent::Plain => ChatUpdate::TextMessage {
                origin,
                text: text.to_string(),
            },
        }
    }
}

impl<'a> ToChatUpdate for TelegramUpdateWrapper<'a> {
    fn to_chat_update(&self) -> ChatUpdate {
        match &self.update.kind {
            UpdateKind::Message(message) => self.message_update(message),
            _ => ChatUpdate::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(message: serde_json::Value) -> Update {
        // teloxide's Update deserializer loses the message via from_value; parse from a string.
        serde_json::from_str(
            &serde_json::json!({
                "update_id": 1,
                "message": message,
            })
            .to_string(),
        )
        .unwrap()
    }

    fn private_text(text: &str) -> serde_json::Value {
        serde_json::json!({
            "message_id": 10,
            "date": 1700000000,
            "chat": {"id": 42, "type": "private", "first_name": "Ann"},
            "from": {"id": 42, "is_bot": false, "first_name": "Ann", "username": "ann"},
            "text": text,
        })
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(classify_text("/start", None), TextIntent::Start);
        assert_eq!(classify_text("/start promo-code", None), TextIntent::Start);
        assert_eq!(classify_text("/stats", None), TextIntent::Stats);
        assert_eq!(classify_text("  /stats  ", None), TextIntent::Stats);
        assert_eq!(classify_text("/stats@my_bot", Some("my_bot")), TextIntent::Stats);
        assert_eq!(classify_text("/stats@My_Bot", Some("my_bot")), TextIntent::Stats);
        assert_eq!(classify_text("/stats@other_bot", Some("my_bot")), TextIntent::Plain);
        assert_eq!(classify_text("/stats@any_bot", None), TextIntent::Stats);
        assert_eq!(classify_text("/help", None), TextIntent::Plain);
        assert_eq!(classify_text("/statsx", None), TextIntent::Plain);
        assert_eq!(classify_text("hello /start", None), TextIntent::Plain);
        assert_eq!(classify_text("Hello", None), TextIntent::Plain);
        assert_eq!(classify_text("/", None), TextIntent::Plain);
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user: teloxide::types::User = serde_json::from_value(serde_json::json!({
            "id": 123,
            "is_bot": false,
            "first_name": "Test",
            "last_name": "User",
            "username": "testuser",
        }))
        .unwrap();

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
    }

    #[test]
    fn test_start_update() {
        let update = update(private_text("/start"));
        match TelegramUpdateWrapper::new(&update).to_chat_update() {
            ChatUpdate::SessionStart(origin) => {
                assert_eq!(origin.user.id, 42);
                assert_eq!(origin.user.username.as_deref(), Some("ann"));
                assert_eq!(origin.chat.id, 42);
                assert_eq!(origin.chat.chat_type, "private");
            }
            other => panic!("expected SessionStart, got {:?}", other),
        }
    }

    #[test]
    fn test_group_chat_type() {
        let mut message = private_text("hi");
        message["chat"] = serde_json::json!({"id": -1001, "type": "supergroup", "title": "devs"});
        let update = update(message);
        let origin = TelegramUpdateWrapper::new(&update)
            .to_chat_update()
            .origin()
            .cloned()
            .unwrap();
        assert_eq!(origin.chat.id, -1001);
        assert_eq!(origin.chat.chat_type, "supergroup");
    }

    #[test]
    fn test_text_update_keeps_raw_text() {
        let update = update(private_text("Hello there"));
        match TelegramUpdateWrapper::new(&update).to_chat_update() {
            ChatUpdate::TextMessage { text, .. } => assert_eq!(text, "Hello there"),
            other => panic!("expected TextMessage, got {:?}", other),
        }
    }

    #[test]
    fn test_stats_for_other_bot_is_text() {
        let update = update(private_text("/stats@other_bot"));
        let converted = TelegramUpdateWrapper::new(&update)
            .with_bot_username(Some("my_bot"))
            .to_chat_update();
        assert!(matches!(converted, ChatUpdate::TextMessage { .. }));
    }

    #[test]
    fn test_message_without_text_is_unhandled() {
        let mut message = private_text("x");
        message.as_object_mut().unwrap().remove("text");
        let update = update(message);
        assert_eq!(
            TelegramUpdateWrapper::new(&update).to_chat_update(),
            ChatUpdate::Unhandled
        );
    }

    #[test]
    fn test_non_message_update_is_unhandled() {
        let update: Update = serde_json::from_value(serde_json::json!({
            "update_id": 2,
            "edited_message": private_text("edited"),
        }))
        .unwrap();
        assert_eq!(
            TelegramUpdateWrapper::new(&update).to_chat_update(),
            ChatUpdate::Unhandled
        );
    }
}
