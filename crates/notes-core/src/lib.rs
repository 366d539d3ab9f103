//! notes-core: Core types for the notes service
//!
//! This crate provides:
//! - The `Note` record and its integer identifier
//! - `NoteFields`, the caller-supplied part of a note
//! - Column length limits shared by every store implementation

pub mod types;

pub use types::{
    FieldError, MAX_BODY_LEN, MAX_STATUS_LEN, MAX_TITLE_LEN, Note, NoteFields, NoteId,
};
