//! notes-server: HTTP API server for the notes backend
//!
//! This crate provides:
//! - REST endpoints for note CRUD under `/api/notes`
//! - A `/healthz` liveness check
//! - Allow-list CORS for the browser client
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{build_app, config::ServerConfig, state::AppState};
//! use notes_store::NoteStore;
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(NoteStore::new(), config);
//! let app = build_app(state)?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{apply_cors, CorsPolicy};
use crate::middleware::request_id::{
    propagate_request_id_layer, request_span, set_request_id_layer,
};

// Re-exports for convenience
pub use config::{ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;

/// Build the router with the full middleware stack.
///
/// Outermost first: request id assignment, request id propagation, tracing,
/// CORS. CORS answers `OPTIONS` itself, so it sits inside the request id
/// layers.
///
/// # Errors
///
/// `ConfigError` if a configured CORS origin is not a valid header value.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = Arc::new(CorsPolicy::from_origins(
        &state.config().cors_allowed_origins,
    )?);

    Ok(routes::build_router(state)
        .layer(axum::middleware::from_fn_with_state(cors, apply_cors))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer()))
}
