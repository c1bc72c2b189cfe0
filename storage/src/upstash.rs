//! Upstash Redis over its REST API.
//!
//! Each command is one `POST <url>` carrying a JSON array (`["LPUSH", "chat:1", "User: hi"]`)
//! and `Authorization: Bearer <token>`. Replies are `{"result": ...}` or `{"error": "..."}`.

use crate::error::StorageError;
use crate::kv_store::KvStore;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

/// Upstash REST client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UpstashStore {
    client: Client,
    url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct CommandResponse {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<String>,
}

impl UpstashStore {
    /// Creates a store for the REST endpoint `url` (e.g. `https://eu1-example.upstash.io`).
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url, token)
    }

    /// Creates a store that reuses an existing HTTP client.
    pub fn with_client(client: Client, url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Sends one command and returns its `result`.
    async fn command(&self, args: &[&str]) -> Result<Value, StorageError> {
        let name = args.first().copied().unwrap_or_default();
        debug!(command = %name, "step: upstash command");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(args)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, command = %name, "Upstash request failed");
                StorageError::Connection(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let parsed: Option<CommandResponse> = serde_json::from_str(&body).ok();
        if let Some(message) = parsed.as_ref().and_then(|p| p.error.clone()) {
            error!(status = %status, command = %name, error = %message, "Upstash command error");
            return Err(StorageError::Command(message));
        }
        if !status.is_success() {
            error!(status = %status, command = %name, "Upstash non-success status");
            return Err(StorageError::Command(format!("HTTP {}: {}", status, body)));
        }
        parsed
            .map(|p| p.result)
            .ok_or_else(|| StorageError::UnexpectedResponse(body))
    }
}

#[async_trait]
impl KvStore for UpstashStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.command(&["GET", key]).await? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => Err(StorageError::UnexpectedResponse(other.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self.command(&["SET", key, value]).await? {
            Value::String(ref s) if s == "OK" => Ok(()),
            other => Err(StorageError::UnexpectedResponse(other.to_string())),
        }
    }

    async fn lpush(&self, key: &str, value: &str) -> Result<u64, StorageError> {
        let result = self.command(&["LPUSH", key, value]).await?;
        result
            .as_u64()
            .ok_or_else(|| StorageError::UnexpectedResponse(result.to_string()))
    }

    async fn ltrim(&self, key: &str, start: i64, stop: i64) -> Result<(), StorageError> {
        let (start, stop) = (start.to_string(), stop.to_string());
        match self.command(&["LTRIM", key, &start, &stop]).await? {
            Value::String(ref s) if s == "OK" => Ok(()),
            other => Err(StorageError::UnexpectedResponse(other.to_string())),
        }
    }

    async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StorageError> {
        let (start, stop) = (start.to_string(), stop.to_string());
        let result = self.command(&["LRANGE", key, &start, &stop]).await?;
        serde_json::from_value(result).map_err(StorageError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_trailing_slash_trimmed() {
        let store = UpstashStore::new("https://example.upstash.io/", "t");
        assert_eq!(store.url, "https://example.upstash.io");
    }

    #[test]
    fn test_command_response_error_shape() {
        let parsed: CommandResponse =
            serde_json::from_str(r#"{"error":"WRONGTYPE Operation"}"#).unwrap();
        assert!(parsed.result.is_null());
        assert_eq!(parsed.error.as_deref(), Some("WRONGTYPE Operation"));
    }
}
