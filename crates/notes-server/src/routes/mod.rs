//! Route definitions for the HTTP API.

pub mod health;
pub mod notes;

use axum::{
    Router,
    http::{Method, Uri},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
///
/// Unknown paths and unsupported methods answer with the same JSON error
/// body as the handlers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}
