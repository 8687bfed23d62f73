// ============================================================
// Layer 1 — Web Presentation Layer
// ============================================================
// Serves the single-page form over HTTP with axum. The loaded
// use case sits behind an Arc in the router state: immutable
// after startup, so sharing it across concurrent requests is
// safe — nothing downstream of load is ever mutated.

pub mod handlers;
pub mod page;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::application::predict_use_case::PredictUseCase;

/// Shared read-only state for all requests.
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<PredictUseCase>,
}

/// Where the server binds.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

/// Run the server until interrupted. The use case must already
/// be loaded — artifact problems abort before we ever bind.
pub fn serve(config: ServeConfig, use_case: PredictUseCase) -> Result<()> {
    let state = AppState { use_case: Arc::new(use_case) };

    let app = Router::new()
        .route("/", get(handlers::index).post(handlers::predict))
        .with_state(state);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Cannot start the async runtime")?;

    runtime.block_on(async move {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Cannot bind to {addr}"))?;
        tracing::info!("Listening on http://{addr}");
        axum::serve(listener, app)
            .await
            .context("Server stopped unexpectedly")
    })
}
