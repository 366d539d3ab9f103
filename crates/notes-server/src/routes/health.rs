//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Configured storage backend.
    pub storage: &'static str,
}

/// GET /health - Liveness probe; does not touch the store.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        storage: state.config().storage.as_str(),
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use notes_store::MemoryStore;

    use super::*;
    use crate::config::{ServerConfig, StorageBackend};

    #[tokio::test]
    async fn test_health_check() {
        let config = ServerConfig {
            storage: StorageBackend::Memory,
            ..ServerConfig::default()
        };
        let state = AppState::new(Arc::new(MemoryStore::new()), config);

        let response = health_check(State(state)).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.storage, "memory");
    }
}
