//! In-memory note store.
//!
//! Mirrors the PostgreSQL store's observable behaviour: ids start at 1,
//! are never reused, and the same column limits apply.

use std::collections::BTreeMap;

use async_trait::async_trait;
use notes_core::{Note, NoteFields, NoteId};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::repository::NoteStore;

#[derive(Debug)]
struct Inner {
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<i32>,
    notes: BTreeMap<NoteId, Note>,
}

/// Note store kept entirely in process memory.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: Some(1),
                notes: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create_note(&self, fields: &NoteFields) -> StoreResult<Note> {
        fields.validate()?;

        let mut inner = self.inner.write().await;
        let id = inner.next_id.ok_or(StoreError::IdsExhausted)?;
        inner.next_id = id.checked_add(1);
        let id = NoteId(id);

        let note = Note::from_fields(id, fields.clone());
        inner.notes.insert(id, note.clone());
        Ok(note)
    }

    async fn get_note(&self, id: NoteId) -> StoreResult<Note> {
        self.inner
            .read()
            .await
            .notes
            .get(&id)
            .cloned()
            .ok_or(StoreError::NoteNotFound(id))
    }

    async fn update_note(&self, id: NoteId, fields: &NoteFields) -> StoreResult<Note> {
        fields.validate()?;

        let mut inner = self.inner.write().await;
        let note = inner
            .notes
            .get_mut(&id)
            .ok_or(StoreError::NoteNotFound(id))?;
        note.apply(fields.clone());
        Ok(note.clone())
    }

    async fn delete_note(&self, id: NoteId) -> StoreResult<Note> {
        self.inner
            .write()
            .await
            .notes
            .remove(&id)
            .ok_or(StoreError::NoteNotFound(id))
    }

    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        Ok(self.inner.read().await.notes.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, body: &str, status: &str) -> NoteFields {
        NoteFields::new(title, body, status)
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.create_note(&fields("a", "b", "open")).await.unwrap();
        let second = store.create_note(&fields("c", "d", "open")).await.unwrap();
        assert_eq!(first.id, NoteId(1));
        assert_eq!(second.id, NoteId(2));
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_note() {
        let store = MemoryStore::new();
        let created = store
            .create_note(&fields("Buy milk", "2%, whole", "open"))
            .await
            .unwrap();
        assert_eq!(store.get_note(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let store = MemoryStore::new();
        let missing = NoteId(999);

        assert!(matches!(
            store.get_note(missing).await,
            Err(StoreError::NoteNotFound(id)) if id == missing
        ));
        assert!(matches!(
            store.update_note(missing, &fields("x", "y", "z")).await,
            Err(StoreError::NoteNotFound(_))
        ));
        assert!(matches!(
            store.delete_note(missing).await,
            Err(StoreError::NoteNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_overwrites_regardless_of_prior_values() {
        let store = MemoryStore::new();
        let created = store.create_note(&fields("a", "b", "open")).await.unwrap();

        let updated = store
            .update_note(created.id, &fields("", "new body", "done"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = store.get_note(created.id).await.unwrap();
        assert_eq!(fetched.fields(), fields("", "new body", "done"));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = MemoryStore::new();
        let created = store.create_note(&fields("a", "b", "open")).await.unwrap();

        let deleted = store.delete_note(created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(matches!(
            store.get_note(created.id).await,
            Err(StoreError::NoteNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.create_note(&fields("a", "", "")).await.unwrap();
        store.delete_note(first.id).await.unwrap();
        let second = store.create_note(&fields("b", "", "")).await.unwrap();
        assert_eq!(second.id, NoteId(2));
    }

    #[tokio::test]
    async fn test_last_id_is_assigned_then_creates_fail() {
        let store = MemoryStore {
            inner: RwLock::new(Inner {
                next_id: Some(i32::MAX),
                notes: BTreeMap::new(),
            }),
        };

        let last = store.create_note(&fields("last", "", "")).await.unwrap();
        assert_eq!(last.id, NoteId(i32::MAX));

        assert!(matches!(
            store.create_note(&fields("one more", "", "")).await,
            Err(StoreError::IdsExhausted)
        ));
        assert_eq!(store.list_notes().await.unwrap(), vec![last]);
    }

    #[tokio::test]
    async fn test_list_returns_exactly_created_notes_in_id_order() {
        let store = MemoryStore::new();
        assert!(store.list_notes().await.unwrap().is_empty());

        let a = store.create_note(&fields("A", "", "")).await.unwrap();
        let b = store.create_note(&fields("B", "", "")).await.unwrap();
        let c = store.create_note(&fields("C", "", "")).await.unwrap();

        assert_eq!(store.list_notes().await.unwrap(), vec![a, b, c]);
    }

    #[tokio::test]
    async fn test_nul_character_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.create_note(&fields("a\0b", "", "")).await,
            Err(StoreError::InvalidField(_))
        ));
        assert!(store.list_notes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overlong_fields_rejected_without_side_effects() {
        let store = MemoryStore::new();
        let created = store.create_note(&fields("a", "b", "open")).await.unwrap();

        let too_long = fields("a", &"b".repeat(121), "open");
        assert!(matches!(
            store.create_note(&too_long).await,
            Err(StoreError::InvalidField(_))
        ));
        assert!(matches!(
            store.update_note(created.id, &too_long).await,
            Err(StoreError::InvalidField(_))
        ));

        assert_eq!(store.list_notes().await.unwrap(), vec![created]);
    }
}
