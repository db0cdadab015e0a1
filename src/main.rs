use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use clearwrite_backend::config::{Config, API_KEY_VAR, API_URL_VAR};
use clearwrite_backend::routes;
use clearwrite_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("clearwrite_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::discover()?;

    if !config.upstream.is_configured() {
        warn!(
            "{} or {} is not set; text processing requests will fail until both are configured",
            API_KEY_VAR, API_URL_VAR
        );
    }
    if !std::path::Path::new(&config.server.static_dir).is_dir() {
        warn!("Static directory {} not found", config.server.static_dir);
    }

    let host = config.server.host.clone();
    let port = config.server.port;
    let app = routes::app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
