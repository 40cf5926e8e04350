//! Liveness endpoint for hosted deployments
//!
//! Hosting platforms probe an HTTP port to decide whether the process is
//! alive; the bot itself only talks to Telegram, so a trivial server answers
//! for it.

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tracing::info;

/// Static body reported to liveness probes.
const RUNNING: &str = "Ticket checker bot is running";

/// Serve the liveness endpoint until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/", get(|| async { RUNNING }))
        .route("/health", get(|| async { RUNNING }));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Liveness endpoint listening on {addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
