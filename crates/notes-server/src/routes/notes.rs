//! Note routes.
//!
//! This module implements the note HTTP endpoints:
//! - POST /note - Add a note
//! - GET /note/{id} - Fetch a note
//! - PUT /note/{id} - Replace a note's title, body and status
//! - DELETE /note/{id} - Delete a note
//! - GET /notes - List all notes
//!
//! Inputs arrive as form fields; every response body is JSON.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;

use notes_core::Note;

use crate::error::ApiResult;
use crate::extract::{NoteForm, NoteIdPath};
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Wire representation of a note: exactly `id`, `title`, `body`, `status`.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub status: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.get(),
            title: note.title,
            body: note.body,
            status: note.status,
        }
    }
}

/// Response for GET /notes.
#[derive(Debug, Serialize)]
pub struct ListNotesResponse {
    pub notes: Vec<NoteResponse>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /note - Add a note.
///
/// # Response
///
/// - 200 OK: the created note
/// - 400 Bad Request: missing or over-long field
async fn add_note(
    State(state): State<AppState>,
    NoteForm(fields): NoteForm,
) -> ApiResult<Json<NoteResponse>> {
    let note = state.store().create_note(&fields).await?;

    tracing::info!(note_id = %note.id, "Note created");

    Ok(Json(note.into()))
}

/// GET /note/{id} - Fetch a single note.
async fn get_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<Json<NoteResponse>> {
    let note = state.store().get_note(id).await?;
    Ok(Json(note.into()))
}

/// PUT /note/{id} - Replace all fields of a note.
///
/// # Response
///
/// - 200 OK: the updated note
/// - 400 Bad Request: invalid id, missing or over-long field
/// - 404 Not Found: `{"message": "Note not found"}`
async fn update_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
    NoteForm(fields): NoteForm,
) -> ApiResult<Json<NoteResponse>> {
    let note = state.store().update_note(id, &fields).await?;

    tracing::info!(note_id = %note.id, "Note updated");

    Ok(Json(note.into()))
}

/// DELETE /note/{id} - Delete a note.
///
/// # Response
///
/// - 200 OK: the note as it was before deletion
/// - 404 Not Found: `{"message": "Note not found"}`
async fn delete_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<Json<NoteResponse>> {
    let note = state.store().delete_note(id).await?;

    tracing::info!(note_id = %note.id, "Note deleted");

    Ok(Json(note.into()))
}

/// GET /notes - List all notes, ordered by id.
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<ListNotesResponse>> {
    let notes = state.store().list_notes().await?;

    tracing::info!(count = notes.len(), "Listed notes");

    Ok(Json(ListNotesResponse {
        notes: notes.into_iter().map(NoteResponse::from).collect(),
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/note", post(add_note))
        .route(
            "/note/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/notes", get(list_notes))
}

// ============================================================================
// Tests
// ============================================================================
