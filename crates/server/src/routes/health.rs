//! Health check endpoint

use axum::{Json, extract::State};
use serde::Serialize;

use crate::ai::Assistant;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    /// "remote" when a generative-language key is configured, else "local"
    ai: String,
}

/// GET /health - The local rule engines are always available, so the
/// service is healthy whether or not remote AI is configured
pub async fn check(State(assistant): State<Assistant>) -> Json<HealthResponse> {
    let ai = if assistant.remote_enabled() {
        "remote"
    } else {
        "local"
    };
    Json(HealthResponse {
        status: "healthy".to_string(),
        ai: ai.to_string(),
    })
}
