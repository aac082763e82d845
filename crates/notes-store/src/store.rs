//! In-memory note store.
//!
//! All notes live in one `HashMap` behind a single `RwLock`. Reads share the
//! lock, writes take it exclusively, and every critical section is one map
//! operation. Validation and record construction happen before the lock is
//! taken.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use notes_core::{Note, NoteId, NotePatch};

use crate::error::{StoreError, StoreResult};

/// Thread-safe store of notes keyed by id.
///
/// The store owns every note; all reads hand out clones. Share it across
/// request handlers behind an `Arc`.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: RwLock<HashMap<NoteId, Note>>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // The map is never left half-written (each critical section is a single
    // insert, remove or field swap), so a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<NoteId, Note>> {
        self.notes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<NoteId, Note>> {
        self.notes.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of all notes, in no particular order.
    pub fn list(&self) -> Vec<Note> {
        self.read().values().cloned().collect()
    }

    /// Returns the note with the given id, if present.
    pub fn get(&self, id: &NoteId) -> Option<Note> {
        self.read().get(id).cloned()
    }

    /// Validates and stores a new note.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` if the title or content is out of bounds.
    pub fn create(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let note = Note::new(title, content)?;
        self.write().insert(note.id(), note.clone());

        tracing::debug!(note_id = %note.id(), "Stored new note");
        Ok(note)
    }

    /// Applies a partial update to an existing note.
    ///
    /// Absent patch fields are left unchanged. `updated_at` advances even for
    /// an empty patch. Last write wins.
    ///
    /// # Errors
    ///
    /// - `StoreError::NoteNotFound` if no note has this id. This is checked
    ///   first, so an unknown id is reported even for an invalid patch.
    /// - `StoreError::Validation` if a supplied field is out of bounds. The
    ///   stored note is not touched.
    pub fn update(&self, id: &NoteId, patch: NotePatch) -> StoreResult<Note> {
        if !self.read().contains_key(id) {
            return Err(StoreError::NoteNotFound(*id));
        }
        let (title, content) = patch.validate()?;

        let mut notes = self.write();
        let note = notes.get_mut(id).ok_or(StoreError::NoteNotFound(*id))?;
        note.revise(title, content);
        let updated = note.clone();
        drop(notes);

        tracing::debug!(note_id = %id, "Updated note");
        Ok(updated)
    }

    /// Removes a note. Returns `false` if there was nothing to remove.
    pub fn delete(&self, id: &NoteId) -> bool {
        let removed = self.write().remove(id).is_some();
        if removed {
            tracing::debug!(note_id = %id, "Deleted note");
        }
        removed
    }

    /// Returns the number of stored notes.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::ValidationError;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn store_new_is_empty() {
        let store = NoteStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn create_then_get_roundtrip() {
        let store = NoteStore::new();
        let created = store.create("Hello", "World").unwrap();

        let fetched = store.get(&created.id()).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_refuses_invalid_input() {
        let store = NoteStore::new();

        let err = store.create("", "World").unwrap_err();
        assert_eq!(err, StoreError::Validation(ValidationError::TitleLength { len: 0 }));

        let err = store.create("Hello", "").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::ContentLength { len: 0 })
        ));

        assert!(store.is_empty());
    }

    #[test]
    fn get_missing_returns_none() {
        let store = NoteStore::new();
        assert!(store.get(&NoteId::new()).is_none());
    }

    #[test]
    fn update_empty_patch_keeps_fields_and_advances_updated_at() {
        let store = NoteStore::new();
        let created = store.create("Hello", "World").unwrap();

        let updated = store.update(&created.id(), NotePatch::default()).unwrap();
        assert_eq!(updated.title(), "Hello");
        assert_eq!(updated.content(), "World");
        assert_eq!(updated.created_at(), created.created_at());
        assert!(updated.updated_at() > created.updated_at());

        assert_eq!(store.get(&created.id()).unwrap(), updated);
    }

    #[test]
    fn update_replaces_only_supplied_fields() {
        let store = NoteStore::new();
        let created = store.create("Hello", "World").unwrap();

        let updated = store
            .update(&created.id(), NotePatch::default().content("Everyone"))
            .unwrap();
        assert_eq!(updated.title(), "Hello");
        assert_eq!(updated.content(), "Everyone");
    }

    #[test]
    fn update_invalid_patch_leaves_note_unchanged() {
        let store = NoteStore::new();
        let created = store.create("Hello", "World").unwrap();

        let err = store
            .update(&created.id(), NotePatch::default().title("").content("New"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.get(&created.id()).unwrap(), created);
    }

    #[test]
    fn update_missing_reports_not_found() {
        let store = NoteStore::new();
        let id = NoteId::new();

        let err = store.update(&id, NotePatch::default().title("x")).unwrap_err();
        assert_eq!(err, StoreError::NoteNotFound(id));

        let err = store.update(&id, NotePatch::default().title("")).unwrap_err();
        assert_eq!(err, StoreError::NoteNotFound(id));
    }

    #[test]
    fn update_after_delete_reports_not_found() {
        let store = NoteStore::new();
        let note = store.create("title", "content").unwrap();
        assert!(store.delete(&note.id()));

        let err = store
            .update(&note.id(), NotePatch::default().content("c".repeat(10_001)))
            .unwrap_err();
        assert_eq!(err, StoreError::NoteNotFound(note.id()));
    }

    #[test]
    fn delete_twice_reports_not_found_second_time() {
        let store = NoteStore::new();
        let created = store.create("Hello", "World").unwrap();

        assert!(store.delete(&created.id()));
        assert!(!store.delete(&created.id()));
        assert!(store.get(&created.id()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn list_returns_every_note() {
        let store = NoteStore::new();
        let a = store.create("a", "1").unwrap();
        let b = store.create("b", "2").unwrap();

        let ids: HashSet<NoteId> = store.list().iter().map(Note::id).collect();
        assert_eq!(ids, HashSet::from([a.id(), b.id()]));
    }

    #[test]
    fn concurrent_creates_produce_distinct_ids() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 50;

        let store = Arc::new(NoteStore::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..PER_THREAD)
                        .map(|i| store.create(format!("t{t}-{i}"), "body").unwrap().id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<NoteId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), THREADS * PER_THREAD);
        assert_eq!(store.list().len(), THREADS * PER_THREAD);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_from_tasks() {
        let store = Arc::new(NoteStore::new());
        let tasks: Vec<_> = (0..100)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(format!("note {i}"), "body").unwrap() })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            ids.insert(task.await.unwrap().id());
        }

        assert_eq!(ids.len(), 100);
        assert_eq!(store.len(), 100);
    }
}
