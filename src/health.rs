//! Health check listener for hosting platforms that probe an HTTP port.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;

pub const HEALTH_MESSAGE: &str = "Rust Hours Discord Bot is running! 🦀";

/// Router answering `GET /` with a fixed message.
pub fn router() -> Router {
    Router::new().route("/", get(|| async { HEALTH_MESSAGE }))
}

/// Bind `0.0.0.0:port` and serve the health check until the task is dropped.
pub async fn serve(port: u16) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    serve_on(listener).await
}

/// Serve the health check on an already bound listener.
pub async fn serve_on(listener: TcpListener) -> Result<()> {
    info!("Health check server running on {}", listener.local_addr()?);
    axum::serve(listener, router()).await?;
    Ok(())
}
