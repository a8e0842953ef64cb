//! HTTP front for the Bodyguard inspector.
//!
//! `/api/handle-request` accepts every method and answers 200 or 403 from
//! the core verdict. `/` serves a short description; everything else is 404.

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use axum::Router;

pub mod config;
pub mod handlers;
pub mod pages;
pub mod telemetry;

pub use config::{LogFormat, ServerConfig};
pub use telemetry::init_tracing;

pub const INSPECT_PATH: &str = "/api/handle-request";

pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(INSPECT_PATH, any(handlers::handle_request))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

/// Bind `config.bind` and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    let local = listener
        .local_addr()
        .context("failed to read bound address")?;

    tracing::info!(
        addr = %local,
        max_body_bytes = config.max_body_bytes,
        "bodyguard listening"
    );

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with error")?;

    tracing::info!("bodyguard stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
