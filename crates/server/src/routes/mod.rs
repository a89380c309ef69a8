pub mod chat;
pub mod health;
pub mod insights;
pub mod metadata;
pub mod metrics;
pub mod symptoms;

use axum::{Router, routing::post};

use crate::ai::Assistant;

/// Build the assistant API routes
pub fn api_routes() -> Router<Assistant> {
    Router::new()
        .route("/symptoms/analyze", post(symptoms::analyze))
        .route("/insights", post(insights::generate))
        .route("/chat", post(chat::chat))
}
