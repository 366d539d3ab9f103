//! API error types with JSON responses.
//!
//! Every error body has the shape `{"message": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_store::StoreError;
use serde::Serialize;

/// Message returned for any missing note.
pub const NOTE_NOT_FOUND: &str = "Note not found";

/// Message returned when storage fails.
pub const STORAGE_UNAVAILABLE: &str = "Storage unavailable";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A required form field was absent (400).
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// An axum extractor rejected the request with its own status,
    /// e.g. 413 for an oversized body.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// No route matches the path (404).
    #[error("no route for {0}")]
    RouteNotFound(String),

    /// The path exists but not for this method (405).
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(e) => match e {
                StoreError::NoteNotFound(_) => StatusCode::NOT_FOUND,
                StoreError::InvalidField(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Get the client-facing message for this error.
    ///
    /// Storage failures are reported generically; the detail goes to the log.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::MissingField(field) => format!("Missing required field: {}", field),
            Self::Rejected { message, .. } => message.clone(),
            Self::RouteNotFound(path) => format!("No route for {}", path),
            Self::MethodNotAllowed(method) => format!("Method {} not allowed", method),
            Self::Store(StoreError::NoteNotFound(_)) => NOTE_NOT_FOUND.to_string(),
            Self::Store(StoreError::InvalidField(e)) => format!("Invalid field: {}", e),
            Self::Store(_) => STORAGE_UNAVAILABLE.to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorResponse {
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert an axum extractor rejection into an `ApiError`.
///
/// Content-type and decoding failures (415, 422) answer 400 like every other
/// malformed input; any other status, such as 413, is kept.
pub fn from_rejection(status: StatusCode, message: String) -> ApiError {
    match status {
        StatusCode::UNSUPPORTED_MEDIA_TYPE | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(message)
        }
        status => ApiError::Rejected { status, message },
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::{FieldError, NoteId};

    #[test]
    fn test_not_found_maps_to_404_with_fixed_message() {
        let err = ApiError::from(StoreError::NoteNotFound(NoteId(999)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Note not found");
    }

    #[test]
    fn test_missing_field_maps_to_400() {
        let err = ApiError::MissingField("body");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Missing required field: body");
    }

    #[test]
    fn test_rejection_status_kept_except_content_and_decoding() {
        let err = from_rejection(StatusCode::PAYLOAD_TOO_LARGE, "too big".to_string());
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.message(), "too big");

        let err = from_rejection(StatusCode::UNSUPPORTED_MEDIA_TYPE, "ct".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = from_rejection(StatusCode::UNPROCESSABLE_ENTITY, "decode".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unrouted_errors() {
        assert_eq!(
            ApiError::RouteNotFound("/nope".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::MethodNotAllowed("PATCH".to_string()).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_nul_field_maps_to_400() {
        let err = ApiError::from(StoreError::InvalidField(FieldError::ContainsNul {
            field: "title",
        }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_field_maps_to_400() {
        let err = ApiError::from(StoreError::InvalidField(FieldError::TooLong {
            field: "title",
            max: 64,
            len: 70,
        }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("title"));
    }

    #[test]
    fn test_storage_failure_hides_detail() {
        let err = ApiError::from(StoreError::Connection(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Storage unavailable");
    }

    #[test]
    fn test_error_response_serialize() {
        let body = ErrorResponse {
            message: NOTE_NOT_FOUND.to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"message":"Note not found"}"#
        );
    }
}
