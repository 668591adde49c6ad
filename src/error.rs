// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::ErrorResponse;
use crate::services::gemini::ModelError;

pub const MODEL_UNAVAILABLE_MESSAGE: &str = "AI model was not initialized correctly.";
pub const NO_MESSAGE_MESSAGE: &str = "No message provided.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "An error occurred while processing your message.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("model client was not initialized")]
    ModelUnavailable,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] ModelError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ModelUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, MODEL_UNAVAILABLE_MESSAGE.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(err) => {
                // Detail stays in the logs, the caller only gets the generic message.
                error!(error = %err, "Failed to get a reply from the model");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_MESSAGE.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
