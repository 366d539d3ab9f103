//! Error types for the storage layer.

use notes_core::{FieldError, NoteId};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Connection(#[from] sqlx::Error),

    /// No note with this id.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// No identifiers left to assign.
    #[error("note id space exhausted")]
    IdsExhausted,

    /// A field does not fit its column.
    #[error("invalid field: {0}")]
    InvalidField(#[from] FieldError),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
