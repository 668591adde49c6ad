use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;

use crate::{
    error::{AppError, NO_MESSAGE_MESSAGE},
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let model = state.model.as_deref().ok_or(AppError::ModelUnavailable)?;

    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected chat request body");
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let message = match payload.message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(AppError::BadRequest(NO_MESSAGE_MESSAGE.to_string())),
    };

    let reply = generate_reply(model, &payload.history, &message).await?;

    Ok(Json(ChatResponse { reply }))
}
