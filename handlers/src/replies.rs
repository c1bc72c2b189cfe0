//! Fixed reply texts.

use storage::UserProfile;

/// Reply to `/start`.
pub const GREETING: &str = "🤖 Бот работает на Upstash!";

/// Reply when the completion API answers non-2xx or cannot be reached.
pub const COMPLETION_FAILED: &str = "⚠️ Ошибка при запросе к AI";

/// Summary sent for `/stats`. A missing display name renders as `-`.
pub fn format_stats(profile: &UserProfile) -> String {
    format!(
        "📊 Ваша статистика:\nID: {}\nИмя: {}\nПоследний раз: {}",
        profile.id,
        profile.first_name.as_deref().unwrap_or("-"),
        profile.last_seen
    )
}
