//! CORS layer built from configuration.

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ConfigError;

/// Build a CORS layer from `CORS_ALLOWED_ORIGINS`.
///
/// `"*"` allows any origin; otherwise the value is a comma-separated list.
pub fn cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: format!("invalid origin '{}'", s),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(origins))
}
