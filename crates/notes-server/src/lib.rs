//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - REST endpoints to add, update, delete, fetch and list notes
//! - Form and path extractors with explicit 400 responses
//! - JSON error bodies of the form `{"message": "..."}`
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation and propagation
//!
//! The note store is injected through `AppState` as a `NoteStore` trait
//! object, so the same router serves PostgreSQL or the in-memory store.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig, StorageBackend};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;

/// Build the router with the full middleware stack.
pub fn app(state: AppState) -> Result<Router, ConfigError> {
    let cors = middleware::cors::cors_layer(&state.config().cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(middleware::request_id::propagate_request_id_layer())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::request_id::request_span::<axum::body::Body>),
        )
        .layer(middleware::request_id::set_request_id_layer()))
}
