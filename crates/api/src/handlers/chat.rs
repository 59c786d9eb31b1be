//! Handler for the chat relay.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use super::require_text;
use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /api/v1/chat
///
/// Forward the message upstream and return the first successful response
/// body unchanged.
pub async fn send_message(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<Json<Value>> {
    require_text("message", &input.message)?;

    tracing::debug!(user_id = user.user_id, chars = input.message.len(), "Relaying chat message");
    let body = state.chat.relay(&input.message).await?;
    Ok(Json(body))
}
