//! LlmClient over openai-client: fixed model, prompt sent as the only user message.

use async_trait::async_trait;
use openai_client::{ChatMessage, CompletionError, OpenAIClient};
use tracing::instrument;

use super::config::LlmConfig;
use super::LlmClient;

/// openai-client based LlmClient.
#[derive(Debug, Clone)]
pub struct OpenAILlmClient {
    client: OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::new(
            OpenAIClient::new(config.api_key(), config.base_url()),
            config.model(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.client
            .chat_completion(&self.model, vec![ChatMessage::user(prompt)])
            .await
    }
}
