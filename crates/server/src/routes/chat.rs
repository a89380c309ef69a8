//! Health chat endpoint

use axum::{Json, extract::State};
use migrantcare_core::chat::validate_message;
use serde::{Deserialize, Serialize};

use crate::ai::Assistant;
use crate::error::AppError;

/// Request body for chat
#[derive(Deserialize)]
pub struct ChatRequest {
    message: String,
}

/// Response body for chat
#[derive(Serialize)]
pub struct ChatResponse {
    response: String,
}

/// POST /api/chat - Answer a free-text health question
pub async fn chat(
    State(assistant): State<Assistant>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = validate_message(&body.message)?;

    tracing::info!(length = message.len(), "Chat request");

    let resolved = assistant.chat(message).await;
    Ok(Json(ChatResponse {
        response: resolved.value,
    }))
}
