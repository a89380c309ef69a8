//! Prometheus metrics endpoint

use axum::{Extension, http::header, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Prometheus text exposition format
const CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// GET /metrics - Render collected metrics, including fallback counters
pub async fn get(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], handle.render())
}
