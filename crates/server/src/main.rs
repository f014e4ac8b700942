//! Player roster server binary.
//!
//! Main entry point for the roster HTTP service.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and an optional `.env`)
//! 2. Logging via `tracing`
//! 3. Player service over the configured store
//! 4. axum router bound to a TCP listener
//!
//! # Examples
//!
//! ```bash
//! # In-memory store on the default address
//! cargo run -p roster-server
//!
//! # File-backed store mounted under /rest
//! ROSTER_STORE=file ROSTER_API_PREFIX=/rest cargo run -p roster-server
//! ```

use anyhow::{Context, Result};
use roster_server::{ServerConfig, build_service, logging, router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ServerConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on drop
    let _log_guard = logging::setup_logging(&config.logging)?;

    tracing::info!("Starting roster server");
    tracing::info!("Store: {}", config.store.kind);
    if !config.api_prefix.is_empty() {
        tracing::info!("API prefix: {}", config.api_prefix);
    }

    // 3. Build service
    let service = build_service(&config.store)?;

    // 4. Serve
    let app = router(service, &config.api_prefix);
    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Roster server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
