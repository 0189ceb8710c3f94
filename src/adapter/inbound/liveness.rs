//! Liveness HTTP endpoint for external uptime monitors.
//!
//! `GET /` answers with a static body; `GET /health` reports start time,
//! uptime, requests served and when the last one finished. Not part of the
//! bot protocol.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::info;

use crate::application::metrics::{format_uptime, RequestMetrics};
use crate::error::Result;

/// Body returned by `GET /`.
pub const ALIVE_BODY: &str = "gainerbot is alive";

/// JSON body returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub started_at: DateTime<Utc>,
    pub uptime_secs: u64,
    /// Uptime as `HH:MM:SS`.
    pub uptime: String,
    pub requests_served: u64,
    pub last_served_at: Option<DateTime<Utc>>,
}

/// Build the liveness router.
pub fn router(metrics: Arc<RequestMetrics>) -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/health", get(health))
        .with_state(metrics)
}

async fn alive() -> &'static str {
    ALIVE_BODY
}

async fn health(State(metrics): State<Arc<RequestMetrics>>) -> Json<HealthBody> {
    let uptime_secs = metrics.uptime_secs();
    Json(HealthBody {
        status: "ok",
        started_at: metrics.started_at(),
        uptime_secs,
        uptime: format_uptime(uptime_secs),
        requests_served: metrics.served(),
        last_served_at: metrics.last_served_at(),
    })
}

/// Bind `addr` and serve until the task is dropped.
pub async fn serve(addr: SocketAddr, metrics: Arc<RequestMetrics>) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, metrics).await
}

/// Serve on an already bound listener.
pub async fn serve_on(listener: TcpListener, metrics: Arc<RequestMetrics>) -> Result<()> {
    info!(addr = %listener.local_addr()?, "Liveness endpoint listening");
    axum::serve(listener, router(metrics)).await?;
    Ok(())
}
