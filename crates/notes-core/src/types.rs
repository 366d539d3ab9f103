//! Core data types for the notes service.
//!
//! A note is a plain record: an id assigned by the store plus three
//! free-form text fields. Persistence lives elsewhere; these types carry
//! no knowledge of how they are stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ============================================================================
// Limits
// ============================================================================

/// Maximum length of a note title, in characters.
pub const MAX_TITLE_LEN: usize = 64;

/// Maximum length of a note body, in characters.
pub const MAX_BODY_LEN: usize = 120;

/// Maximum length of a note status, in characters.
pub const MAX_STATUS_LEN: usize = 20;

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a stored note.
///
/// Assigned by the store on create and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i32);

impl NoteId {
    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for NoteId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ============================================================================
// Note
// ============================================================================

/// The mutable part of a note, as supplied by a caller on create or update.
///
/// Updates replace all three fields at once; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: String,
    pub body: String,
    pub status: String,
}

impl NoteFields {
    /// Creates a new set of note fields.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            status: status.into(),
        }
    }

    /// Checks every field against its column limit.
    ///
    /// Lengths are counted in characters, matching `VARCHAR(n)` semantics.
    /// Empty strings are accepted; NUL characters are not, since PostgreSQL
    /// text cannot hold them.
    pub fn validate(&self) -> Result<(), FieldError> {
        check_field("title", &self.title, MAX_TITLE_LEN)?;
        check_field("body", &self.body, MAX_BODY_LEN)?;
        check_field("status", &self.status, MAX_STATUS_LEN)?;
        Ok(())
    }
}

fn check_field(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    if value.contains('\0') {
        return Err(FieldError::ContainsNul { field });
    }
    let len = value.chars().count();
    if len > max {
        return Err(FieldError::TooLong { field, max, len });
    }
    Ok(())
}

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    pub status: String,
}

impl Note {
    /// Builds a note from an id and a set of fields.
    pub fn from_fields(id: NoteId, fields: NoteFields) -> Self {
        Self {
            id,
            title: fields.title,
            body: fields.body,
            status: fields.status,
        }
    }

    /// Overwrites all mutable fields.
    pub fn apply(&mut self, fields: NoteFields) {
        self.title = fields.title;
        self.body = fields.body;
        self.status = fields.status;
    }

    /// Returns a copy of the mutable fields.
    pub fn fields(&self) -> NoteFields {
        NoteFields::new(&*self.title, &*self.body, &*self.status)
    }
}

/// A note field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The value exceeds the column limit.
    #[error("field '{field}' exceeds {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    /// The value contains a NUL character.
    #[error("field '{field}' contains a NUL character")]
    ContainsNul { field: &'static str },
}
