//! Storage crate: key-value access and the session records kept per user.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserProfile, history keys and role tags
//! - [`kv_store`] – KvStore trait (GET / SET / LPUSH / LTRIM / LRANGE)
//! - [`upstash`] – UpstashStore (Upstash Redis REST API)
//! - [`inmemory`] – InMemoryKvStore (tests and local runs)
//! - [`session_store`] – SessionStore (profile upsert, history push-and-trim)

mod error;
mod inmemory;
mod kv_store;
mod models;
mod session_store;
mod upstash;

pub use error::StorageError;
pub use inmemory::InMemoryKvStore;
pub use kv_store::KvStore;
pub use models::{chat_key, user_key, HistoryRole, UserProfile, HISTORY_LIMIT};
pub use session_store::SessionStore;
pub use upstash::UpstashStore;
