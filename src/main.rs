// src/main.rs

use agriviet_backend::config::{AppState, Config};
use agriviet_backend::routes::api_router;
use agriviet_backend::shutdown_signal;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env();
    let state = AppState::from_config(&config).await?;

    let app = api_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
