use std::sync::Arc;

use anyhow::{Context, Result};
use pcos_config::ServerConfig;
use pcos_engine::ArtifactStore;
use pcos_server::{app, ServerState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let paths = config.artifact_paths();
    let pipeline = ArtifactStore::load(&paths).map_err(|e| {
        tracing::error!("Model artifacts could not be loaded: {}", e);
        e
    })?;

    let state = Arc::new(ServerState::new(pipeline));
    let app = app(state, &config);

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
