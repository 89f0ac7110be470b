// src/bin/proxy.rs

use std::net::SocketAddr;

use agriviet_backend::proxy::{proxy_router, ProxyConfig, ProxyState};
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

    let config = ProxyConfig::from_env();
    let app = proxy_router(ProxyState::new(config.backend_url.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "proxy listening on {}, forwarding to {}",
        listener.local_addr()?,
        config.backend_url
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
