//! Repository interface over note persistence.
//!
//! Handlers depend on `NoteStore` rather than a concrete backend, so the
//! HTTP layer runs unchanged against PostgreSQL or the in-memory store.

use async_trait::async_trait;
use notes_core::{Note, NoteFields, NoteId};

use crate::error::StoreResult;

/// CRUD operations on notes.
///
/// Every write is durable when the returned future resolves. Operations
/// addressing a missing id fail with `StoreError::NoteNotFound`.
#[async_trait]
pub trait NoteStore: Send + Sync + std::fmt::Debug {
    /// Insert a new note and return it with its assigned id.
    async fn create_note(&self, fields: &NoteFields) -> StoreResult<Note>;

    /// Get a note by id.
    async fn get_note(&self, id: NoteId) -> StoreResult<Note>;

    /// Overwrite all fields of an existing note and return the result.
    async fn update_note(&self, id: NoteId, fields: &NoteFields) -> StoreResult<Note>;

    /// Remove a note and return its last stored values.
    async fn delete_note(&self, id: NoteId) -> StoreResult<Note>;

    /// List every note, ordered by id ascending.
    async fn list_notes(&self) -> StoreResult<Vec<Note>>;
}
