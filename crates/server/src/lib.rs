//! migrantcare-server library crate
//!
//! `build_app` assembles the router so integration tests can drive it
//! in-process; `main.rs` only binds and serves it.

pub mod ai;
pub mod config;
mod error;
mod middleware;
mod routes;

use std::time::Duration;

use axum::{Extension, Router, http::HeaderValue, middleware as axum_mw, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ai::{Assistant, GeminiClient, LocalBackend, RemoteBackend};
use config::Config;
use middleware::ApiKeyAuth;

/// Build the assistant from configuration. The remote variant is only
/// present when a generative-language API key is configured.
pub fn build_assistant(config: &Config) -> Assistant {
    let remote = config.gemini_api_key.as_ref().and_then(|key| {
        let client = GeminiClient::new(
            key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            Duration::from_secs(config.ai_timeout_secs),
        );
        match client {
            Ok(client) => Some(RemoteBackend::new(client)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to build AI client, using local engines only");
                None
            }
        }
    });

    Assistant::new(remote, LocalBackend::new(config.chat_seed))
}

/// Build the full application router with all routes and middleware.
pub fn build_app(config: &Config) -> Router {
    let assistant = build_assistant(config);

    // /api/* needs the key (when configured) and is rate limited
    let api = Router::new()
        .nest("/api", routes::api_routes())
        .layer(axum_mw::from_fn(middleware::auth_middleware))
        .layer(Extension(ApiKeyAuth::new(config.api_key.clone())))
        .layer(axum_mw::from_fn(middleware::rate_limit_middleware))
        .layer(Extension(middleware::create_rate_limiter(
            config.rate_limit_rps,
        )));

    let public = Router::new()
        .route("/health", get(routes::health::check))
        .route("/metadata", get(routes::metadata::get))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(install_metrics_recorder()));

    Router::new()
        .merge(public)
        .merge(api)
        .with_state(assistant)
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}

/// Install the Prometheus recorder. Only the first install in a process
/// becomes global; later calls (one per test app) still get a usable handle.
fn install_metrics_recorder() -> PrometheusHandle {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    if metrics::set_global_recorder(recorder).is_err() {
        tracing::debug!("Metrics recorder already installed");
    }
    handle
}

/// `*` anywhere in the list allows every origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(parsed)
}
