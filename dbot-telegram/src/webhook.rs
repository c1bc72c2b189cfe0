//! Telegram webhook HTTP server.
//!
//! Telegram POSTs each update to `WEBHOOK_PATH`. The body is parsed once into a teloxide
//! `Update`, classified into a [`dbot_core::ChatUpdate`], and dispatched. Every outcome collapses
//! to `200 OK` or `500 Error` here and nowhere else.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};
use dbot_core::ToChatUpdate;
use handlers::UpdateDispatcher;
use std::sync::Arc;
use teloxide::types::Update;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::adapters::TelegramUpdateWrapper;

/// Header Telegram sets when the webhook was registered with a secret token.
pub const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

#[derive(Clone)]
pub struct WebhookState {
    dispatcher: Arc<UpdateDispatcher>,
    secret: Option<String>,
    bot_username: Option<String>,
}

impl WebhookState {
    pub fn new(dispatcher: UpdateDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            secret: None,
            bot_username: None,
        }
    }

    /// Requests without a matching secret-token header get `401` and are not dispatched.
    pub fn with_secret(mut self, secret: Option<String>) -> Self {
        self.secret = secret;
        self
    }

    /// Used to ignore commands addressed to other bots (`/stats@other_bot`).
    pub fn with_bot_username(mut self, bot_username: Option<String>) -> Self {
        self.bot_username = bot_username;
        self
    }
}

/// Routes: `POST <webhook_path>` and `GET /health`.
pub fn router(state: WebhookState, webhook_path: &str) -> Router {
    Router::new()
        .route(webhook_path, post(handle_update))
        .route("/health", get(health))
        .with_state(state)
}

/// Serves `app` on `listener` until the server fails.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!(addr = %addr, "Webhook server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

async fn handle_update(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    if let Some(ref secret) = state.secret {
        let provided = headers
            .get(SECRET_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if provided != secret {
            warn!("Rejected webhook request: secret token mismatch");
            return (StatusCode::UNAUTHORIZED, "Unauthorized");
        }
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            error!(error = %e, body_len = body.len(), "Failed to parse update body");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error");
        }
    };

    let chat_update = TelegramUpdateWrapper::new(&update)
        .with_bot_username(state.bot_username.as_deref())
        .to_chat_update();
    debug!(update_id = update.id.0, kind = chat_update.kind(), "Received update");

    match state.dispatcher.dispatch(&chat_update).await {
        Ok(_) => (StatusCode::OK, "OK"),
        Err(e) => {
            error!(
                error = %e,
                update_id = update.id.0,
                kind = chat_update.kind(),
                user_id = chat_update.origin().map(|o| o.user.id),
                "Update handling failed"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Error")
        }
    }
}
