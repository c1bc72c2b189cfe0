use crate::error::StorageError;
use async_trait::async_trait;

/// The subset of Redis commands the bot uses. List indices follow Redis semantics
/// (inclusive, negative counts from the tail).
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Prepends `value`; returns the list length after the push.
    async fn lpush(&self, key: &str, value: &str) -> Result<u64, StorageError>;
    async fn ltrim(&self, key: &str, start: i64, stop: i64) -> Result<(), StorageError>;
    async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StorageError>;
}
