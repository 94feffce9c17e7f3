//! Liveness endpoint for hosting platforms: `GET /` → `200 Bot is alive!`.

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{info, instrument};

pub const ALIVE_BODY: &str = "Bot is alive!";

/// Router with the single liveness route. Unknown paths get 404, other methods on `/` 405.
pub fn health_router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    ALIVE_BODY
}

/// Binds `0.0.0.0:port` and serves [`health_router`] until the process ends.
#[instrument]
pub async fn serve_health(port: u16) -> Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind liveness server on {}", addr))?;

    info!(addr = %addr, "Liveness server listening");

    axum::serve(listener, health_router())
        .await
        .context("Liveness server stopped")?;
    Ok(())
}
