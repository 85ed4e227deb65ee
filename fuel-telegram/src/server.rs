//! HTTP surface: `GET /` health check and `POST /webhook/{token}` update intake.
//!
//! Handlers get their dependencies from [`AppState`]; nothing is global. An authenticated text
//! update is handed to [`dispatch`] on its own task and the request is acknowledged right away.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fuel_core::{Bot, HandlerResponse, Message};
use handler_chain::HandlerChain;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, instrument, warn};

use crate::update::InboundUpdate;

/// Shared, read-only dependencies of the route handlers.
pub struct AppState {
    secret: String,
    bot: Arc<dyn Bot>,
    chain: HandlerChain,
}

impl AppState {
    /// `secret` is the path token callers must present (the bot token).
    pub fn new(secret: impl Into<String>, bot: Arc<dyn Bot>, chain: HandlerChain) -> Self {
        Self {
            secret: secret.into(),
            bot,
            chain,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("forbidden")]
    Forbidden,
    #[error("invalid update: {0}")]
    InvalidUpdate(String),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebhookError::Forbidden => StatusCode::FORBIDDEN,
            WebhookError::InvalidUpdate(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Builds the application router around the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/webhook/{token}", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[instrument(skip_all)]
async fn webhook(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, WebhookError> {
    if token != state.secret {
        warn!("Webhook called with wrong token");
        return Err(WebhookError::Forbidden);
    }

    let update = InboundUpdate::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Webhook body is not a valid update");
        WebhookError::InvalidUpdate(e.to_string())
    })?;

    match update {
        InboundUpdate::Text(message) => {
            info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                message_id = %message.id,
                "Received text message"
            );
            tokio::spawn(dispatch(state.clone(), message));
        }
        InboundUpdate::Other { update_id } => {
            debug!(update_id, "Ignoring non-text update");
        }
    }

    Ok(Json(json!({ "ok": true })))
}

/// Runs the handler chain for one message and sends a `Reply` back to its chat.
/// Failures are logged and dropped.
pub async fn dispatch(state: Arc<AppState>, message: Message) {
    match state.chain.handle(&message).await {
        Ok(HandlerResponse::Reply(text)) => {
            if let Err(e) = state.bot.reply_to(&message, &text).await {
                error!(error = %e, chat_id = message.chat.id, "Failed to deliver reply");
            }
        }
        Ok(response) => {
            debug!(chat_id = message.chat.id, response = ?response, "No reply for message");
        }
        Err(e) => {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
        }
    }
}
