//! Metadata endpoint handler

use axum::{Json, extract::State};
use migrantcare_core::ServiceInfo;

use crate::ai::Assistant;

/// GET /metadata - Return the service descriptor
pub async fn get(State(assistant): State<Assistant>) -> Json<ServiceInfo> {
    Json(ServiceInfo::new(assistant.remote_enabled()))
}
