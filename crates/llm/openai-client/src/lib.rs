//! # OpenAI-compatible chat completion client
//!
//! Sends `POST <base>/chat/completions` with a bearer key and returns the first choice's content.
//! Works with any OpenAI-compatible endpoint (OpenAI, Mistral, local proxies).
//! Provides token masking for safe logging.

mod types;

use reqwest::Client;
use thiserror::Error;

pub use types::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ResponseMessage, Usage,
};

/// Errors from a completion call. Every variant means "no usable reply".
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No choices in response")]
    NoChoices,
}

impl CompletionError {
    /// True when the API gave no successful answer at all (non-2xx or no response).
    /// `Decode` and `NoChoices` follow a 2xx and are false.
    pub fn is_unsuccessful_response(&self) -> bool {
        matches!(
            self,
            CompletionError::Transport(_) | CompletionError::Status { .. }
        )
    }
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
/// Exposed for tests and for callers who need to log API keys safely.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Chat completion client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Builds a client for `base_url` (e.g. `https://api.mistral.ai/v1`).
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), api_key, base_url)
    }

    /// Builds a client that reuses an existing reqwest client.
    pub fn with_http_client(
        http: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends one chat completion request and returns the first choice's content.
    ///
    /// Logs the masked API key and token usage. A choice without content yields an empty string.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<String, CompletionError> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key),
            "Chat completion request"
        );

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages,
        };

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Chat completion non-success status");
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "Chat completion usage"
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(CompletionError::NoChoices)
    }
}
