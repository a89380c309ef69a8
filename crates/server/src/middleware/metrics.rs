//! Prometheus metrics collection middleware
//!
//! Records `http_requests_total` (counter) and `http_request_duration_seconds`
//! (histogram) for every request, with method/path/status labels.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Routes served by this application; anything else is labelled `other`
const KNOWN_PATHS: &[&str] = &[
    "/health",
    "/metadata",
    "/metrics",
    "/api/symptoms/analyze",
    "/api/insights",
    "/api/chat",
];

/// Normalize request paths to avoid high-cardinality labels from probes and typos.
fn normalize_path(path: &str) -> String {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    if KNOWN_PATHS.contains(&trimmed) {
        trimmed.to_string()
    } else {
        "other".to_string()
    }
}

/// Middleware that records request count and duration metrics.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = normalize_path(request.uri().path());

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path
    )
    .record(duration);

    response
}

/// Count which branch produced an assistant answer
pub fn record_resolution(operation: &'static str, source: &'static str) {
    metrics::counter!(
        "ai_resolutions_total",
        "operation" => operation,
        "source" => source
    )
    .increment(1);
}
