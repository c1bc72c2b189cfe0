//! Profile record stored under `user:<id>` as a JSON string.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Key of the profile record for `user_id`.
pub fn user_key(user_id: i64) -> String {
    format!("user:{}", user_id)
}

/// Profile written on every `/start`; a write replaces the previous value entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    /// ISO-8601, UTC, millisecond precision (e.g. `2024-05-01T10:00:00.000Z`).
    pub last_seen: String,
}

impl UserProfile {
    pub fn new(
        id: i64,
        username: Option<String>,
        first_name: Option<String>,
        seen_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            first_name,
            last_seen: seen_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
