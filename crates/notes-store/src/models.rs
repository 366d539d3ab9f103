//! Database models for the storage layer.
//!
//! These types map directly to rows of the `note` table and stay
//! separate from the domain types in notes-core.

use notes_core::{Note, NoteId};
use sqlx::FromRow;

/// Database row for the `note` table.
///
/// Text columns decode as optional so that tables created without
/// `NOT NULL` (older deployments) still load; NULL reads as "".
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId(row.id),
            title: row.title.unwrap_or_default(),
            body: row.body.unwrap_or_default(),
            status: row.status.unwrap_or_default(),
        }
    }
}
