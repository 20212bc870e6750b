use std::sync::Arc;

use anyhow::Context;
use hackathons_server::api::{AppState, create_router};
use hackathons_server::config::ServerConfig;
use hackathons_server::db::init_pool_and_migrate;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    info!("starting hackathons server");
    let config = ServerConfig::load().context("failed to load server config")?;

    let db = init_pool_and_migrate(&config.database_url)
        .await
        .context("failed to initialize database")?;

    let state = Arc::new(AppState::new(db, &config).context("failed to build app state")?);
    let app = create_router(state, &config);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, uploads = %config.uploads.dir.display(), "server is ready, press Ctrl+C to shut down");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received, stopping server"),
        Err(err) => warn!(error = %err, "failed to listen for shutdown signal"),
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
