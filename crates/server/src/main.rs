//! migrantcare-server: binds the assistant API and serves it until shutdown.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use migrantcare_server::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = Config::from_env();
    log_startup(&config);

    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        tracing::error!(address = %config.bind_address, error = %e, "Invalid bind address");
        e
    })?;
    let app = migrantcare_server::build_app(&config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "MigrantCare assistant listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn log_startup(config: &Config) {
    match config.api_key {
        Some(_) => tracing::info!("API key authentication enabled"),
        None => tracing::warn!("API_KEY not set, /api routes are open"),
    }
    match config.gemini_api_key {
        Some(_) => tracing::info!(
            model = %config.gemini_model,
            timeout_secs = config.ai_timeout_secs,
            "Remote AI enabled"
        ),
        None => tracing::warn!("GEMINI_API_KEY not set, answering with local rule engines only"),
    }
    if config.chat_seed.is_some() {
        tracing::info!("Chat replies use a fixed seed");
    }
    tracing::info!(rps = config.rate_limit_rps, "Rate limiting /api routes");
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
