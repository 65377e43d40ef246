use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;

use crate::{
    appstate::AppState,
    config::ErrorMode,
    error::ApiError,
    types::{ChatRequest, ChatResponse},
};

pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Rejected {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;
    let message = body.message().ok_or_else(ApiError::no_message)?;

    debug!(message_chars = message.chars().count(), "chat request");

    match state.relay.reply(message).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(e) if state.error_mode == ErrorMode::Legacy => Ok(Json(ChatResponse {
            response: e.to_string(),
        })),
        Err(e) => Err(e.into()),
    }
}
