//! Test doubles shared by handler integration tests: recording [`Bot`], scripted [`LlmClient`],
//! and a [`KvStore`] that always fails.

#![allow(dead_code)]

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Origin, Result as DbotResult, User};
use llm_client::{CompletionError, LlmClient};
use std::sync::{Arc, Mutex};
use storage::{KvStore, StorageError};

/// One recorded `send_message(chat, text)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
}

/// Bot that records every send; optionally fails every send.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentMessage>>,
    fail: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|m| m.text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> DbotResult<()> {
        if self.fail {
            return Err(DbotError::Bot("send failed".to_string()));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// What [`ScriptedLlm`] answers with.
enum Script {
    Reply(String),
    Status(u16),
    NoChoices,
    Undecodable,
}

/// LlmClient that answers every prompt the same way: a fixed reply or a fixed failure.
pub struct ScriptedLlm {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    fn with(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(reply: &str) -> Arc<Self> {
        Self::with(Script::Reply(reply.to_string()))
    }

    /// Non-2xx answer.
    pub fn failing_with(status: u16) -> Arc<Self> {
        Self::with(Script::Status(status))
    }

    /// 2xx answer with an empty `choices` list.
    pub fn without_choices() -> Arc<Self> {
        Self::with(Script::NoChoices)
    }

    /// 2xx answer whose body is not a completion.
    pub fn undecodable() -> Arc<Self> {
        Self::with(Script::Undecodable)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(&self, prompt: &str) -> std::result::Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Status(status) => Err(CompletionError::Status {
                status: *status,
                body: "error".to_string(),
            }),
            Script::NoChoices => Err(CompletionError::NoChoices),
            Script::Undecodable => Err(CompletionError::Decode(
                serde_json::from_str::<serde_json::Value>("<html>oops</html>").unwrap_err(),
            )),
        }
    }
}

/// KvStore whose every command fails as if the store were unreachable.
pub struct UnreachableKv;

#[async_trait]
impl KvStore for UnreachableKv {
    async fn get(&self, _key: &str) -> std::result::Result<Option<String>, StorageError> {
        Err(StorageError::Connection("unreachable".to_string()))
    }
    async fn set(&self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
        Err(StorageError::Connection("unreachable".to_string()))
    }
    async fn lpush(&self, _key: &str, _value: &str) -> std::result::Result<u64, StorageError> {
        Err(StorageError::Connection("unreachable".to_string()))
    }
    async fn ltrim(&self, _key: &str, _start: i64, _stop: i64) -> std::result::Result<(), StorageError> {
        Err(StorageError::Connection("unreachable".to_string()))
    }
    async fn lrange(
        &self,
        _key: &str,
        _start: i64,
        _stop: i64,
    ) -> std::result::Result<Vec<String>, StorageError> {
        Err(StorageError::Connection("unreachable".to_string()))
    }
}

pub fn origin(user_id: i64) -> Origin {
    Origin {
        user: User {
            id: user_id,
            username: Some("tester".to_string()),
            first_name: Some("Test".to_string()),
        },
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
    }
}
