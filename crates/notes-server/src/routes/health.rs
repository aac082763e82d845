//! Health check endpoint.

use axum::{routing::get, Router};

use crate::state::AppState;

/// GET /healthz - Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/healthz", get(health_check))
}
