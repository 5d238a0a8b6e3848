use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::{Context, Result};
use govanity::{Config, SiteConfig, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let site = SiteConfig::load(&config.site)?;
    info!(packages = site.packages.len(), "Loaded site configuration");

    let app = create_router(site);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))
        .context("Invalid bind address")?;
    info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

/// Waits for the shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Shutdown signal received, stopping server...");
}
