//! # Update handlers
//!
//! [`UpdateDispatcher`] routes each [`dbot_core::ChatUpdate`] to exactly one flow:
//! session start, text message (completion round-trip), or stats query.
//! Flows return [`FlowError`] for anything the caller has to surface; completion failures are
//! answered in-chat and never become errors.

mod dispatcher;
mod error;
mod replies;
mod start_handler;
mod stats_handler;
mod text_handler;

pub use dispatcher::UpdateDispatcher;
pub use error::FlowError;
pub use replies::{format_stats, COMPLETION_FAILED, GREETING};
pub use start_handler::StartHandler;
pub use stats_handler::StatsHandler;
pub use text_handler::TextHandler;
