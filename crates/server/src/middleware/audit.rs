//! Audit trail for assistant requests

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};

use super::request_id::RequestId;

/// Log one `audit` line per `/api` call. Bodies carry health data and are
/// never logged; only the path, status and latency are.
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if !path.starts_with("/api/") {
        return next.run(request).await;
    }

    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let started = Instant::now();
    let response = next.run(request).await;

    tracing::info!(
        target: "audit",
        request_id = %request_id,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Assistant request"
    );

    response
}
