//! # In-Memory Key-Value Store
//!
//! [`KvStore`] implementation backed by a `HashMap`, for tests and local development.
//! Mirrors the Redis semantics the bot relies on: strings and lists live in one keyspace,
//! type mismatches fail with `WRONGTYPE`, and a list trimmed to nothing disappears.
//!
//! The store uses `Arc<RwLock<>>` so clones share the same data.

use crate::error::StorageError;
use crate::kv_store::KvStore;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

const WRONGTYPE: &str = "WRONGTYPE Operation against a key holding the wrong kind of value";

#[derive(Debug, Clone)]
enum Value {
    Str(String),
    List(VecDeque<String>),
}

/// In-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKvStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemoryKvStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys in the store.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Resolves Redis-style inclusive indices against a list of `len` items.
/// Returns `None` when the range selects nothing.
fn resolve_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if len == 0 || start > stop || start >= len || stop < 0 {
        return None;
    }
    Some((start as usize, stop as usize))
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.entries.read().await.get(key) {
            None => Ok(None),
            Some(Value::Str(s)) => Ok(Some(s.clone())),
            Some(Value::List(_)) => Err(StorageError::Command(WRONGTYPE.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), Value::Str(value.to_string()));
        Ok(())
    }

    async fn lpush(&self, key: &str, value: &str) -> Result<u64, StorageError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| Value::List(VecDeque::new()));
        match entry {
            Value::List(list) => {
                list.push_front(value.to_string());
                Ok(list.len() as u64)
            }
            Value::Str(_) => Err(StorageError::Command(WRONGTYPE.to_string())),
        }
    }

    async fn ltrim(&self, key: &str, start: i64, stop: i64) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        let list = match entries.get_mut(key) {
            None => return Ok(()),
            Some(Value::Str(_)) => return Err(StorageError::Command(WRONGTYPE.to_string())),
            Some(Value::List(list)) => list,
        };
        match resolve_range(list.len(), start, stop) {
            Some((from, to)) => {
                list.truncate(to + 1);
                list.drain(..from);
            }
            None => {
                entries.remove(key);
            }
        }
        Ok(())
    }

    async fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StorageError> {
        let entries = self.entries.read().await;
        let list = match entries.get(key) {
            None => return Ok(Vec::new()),
            Some(Value::Str(_)) => return Err(StorageError::Command(WRONGTYPE.to_string())),
            Some(Value::List(list)) => list,
        };
        Ok(match resolve_range(list.len(), start, stop) {
            Some((from, to)) => list.range(from..=to).cloned().collect(),
            None => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_range() {
        assert_eq!(resolve_range(5, 0, -1), Some((0, 4)));
        assert_eq!(resolve_range(5, 0, 9), Some((0, 4)));
        assert_eq!(resolve_range(12, 0, 9), Some((0, 9)));
        assert_eq!(resolve_range(5, -2, -1), Some((3, 4)));
        assert_eq!(resolve_range(5, -10, 1), Some((0, 1)));
        assert_eq!(resolve_range(5, 3, 1), None);
        assert_eq!(resolve_range(5, 5, 9), None);
        assert_eq!(resolve_range(0, 0, -1), None);
        assert_eq!(resolve_range(5, 0, -6), None);
    }

    #[tokio::test]
    async fn test_get_set_overwrites() {
        let store = InMemoryKvStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);
        store.set("k", "a").await.unwrap();
        store.set("k", "b").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("b".to_string()));
    }

    #[tokio::test]
    async fn test_lpush_is_newest_first() {
        let store = InMemoryKvStore::new();
        assert_eq!(store.lpush("l", "1").await.unwrap(), 1);
        assert_eq!(store.lpush("l", "2").await.unwrap(), 2);
        assert_eq!(store.lrange("l", 0, -1).await.unwrap(), vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_ltrim_keeps_head() {
        let store = InMemoryKvStore::new();
        for i in 0..15 {
            store.lpush("l", &i.to_string()).await.unwrap();
        }
        store.ltrim("l", 0, 9).await.unwrap();
        let items = store.lrange("l", 0, -1).await.unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items.first().map(String::as_str), Some("14"));
        assert_eq!(items.last().map(String::as_str), Some("5"));
    }

    #[tokio::test]
    async fn test_ltrim_to_empty_removes_key() {
        let store = InMemoryKvStore::new();
        store.lpush("l", "x").await.unwrap();
        store.ltrim("l", 1, 0).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_wrong_type() {
        let store = InMemoryKvStore::new();
        store.set("s", "v").await.unwrap();
        assert!(matches!(
            store.lpush("s", "x").await,
            Err(StorageError::Command(_))
        ));
        store.lpush("l", "x").await.unwrap();
        assert!(matches!(store.get("l").await, Err(StorageError::Command(_))));
    }
}
