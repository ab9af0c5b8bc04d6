//! PagePeek server entry point.
//!
//! Loads configuration from the environment, initializes structured logging,
//! and serves the fetch-website endpoint.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use pagepeek_server::config::ServerConfig;
use pagepeek_server::routes;
use pagepeek_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(addr = %config.bind_addr, "PagePeek starting");

    let state = Arc::new(AppState::from_config(&config));
    let app = routes::router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
