// src/application/note_repository.rs
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::domain::{Clock, DomainError, Note, SystemClock};
use crate::util::text::first_line_summary;

/// Persisted key-value slot holding the whole note list
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Current list, newest first; an absent key reads as empty
    async fn get(&self) -> Result<Vec<Note>, DomainError>;

    /// Replace the whole list in a single write
    async fn set(&self, notes: Vec<Note>) -> Result<(), DomainError>;
}

/// Note operations on top of a [`NoteStore`].
///
/// Every read-modify-write runs under `write_lock`, so concurrent adds and
/// deletes through one repository never drop each other's changes. The lock
/// is per process: two processes writing the same store file (a `listen`
/// loop and a separate `add`, say) are last-writer-wins, and one may drop
/// the other's change.
pub struct NoteRepository<S: NoteStore> {
    store: S,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl<S: NoteStore> NoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Time source shared with everything that stamps notes or exports
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Manual entry: keeps only the first line of `body`, marked with `...`
    /// when more lines were dropped
    #[instrument(level = "debug", skip(self, body))]
    pub async fn add_note(&self, source_url: &str, body: &str) -> Result<Note, DomainError> {
        let summary = first_line_summary(body);
        if summary.is_empty() {
            debug!("Refusing to add empty note");
            return Err(DomainError::EmptyInput);
        }
        self.prepend(source_url, &summary).await
    }

    /// Context-menu capture: stores the selection unmodified
    #[instrument(level = "debug", skip(self, selection_text))]
    pub async fn add_note_verbatim(
        &self,
        source_url: &str,
        selection_text: &str,
    ) -> Result<Note, DomainError> {
        self.prepend(source_url, selection_text).await
    }

    async fn prepend(&self, source_url: &str, body: &str) -> Result<Note, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.store.get().await?;

        let now = self.clock.now_millis();
        let id = match notes.first() {
            Some(head) if head.id >= now => head.id.checked_add(1).ok_or_else(|| {
                DomainError::StorageWrite(format!("id space exhausted after {}", head.id))
            })?,
            _ => now,
        };
        let note = Note::new(id, source_url, body, self.clock.now_iso8601());

        notes.insert(0, note.clone());
        self.store.set(notes).await?;

        info!(note_id = note.id, "Saved note");
        Ok(note)
    }

    pub async fn list_recent(&self, n: usize) -> Result<Vec<Note>, DomainError> {
        let mut notes = self.store.get().await?;
        notes.truncate(n);
        Ok(notes)
    }

    pub async fn list_all(&self) -> Result<Vec<Note>, DomainError> {
        self.store.get().await
    }

    /// Remove the note with `id`. Returns `false`, leaving the store
    /// untouched, when no such note exists.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_note(&self, id: i64) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;
        let notes = self.store.get().await?;
        let before = notes.len();

        let remaining: Vec<Note> = notes.into_iter().filter(|n| n.id != id).collect();
        if remaining.len() == before {
            debug!(note_id = id, "Note not found, nothing to delete");
            return Ok(false);
        }

        self.store.set(remaining).await?;
        info!(note_id = id, "Deleted note");
        Ok(true)
    }

    pub fn search(&self, query: &str) -> SearchPredicate {
        SearchPredicate::new(query)
    }
}

/// Case-insensitive substring match over a note's body segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPredicate {
    needle: String,
}

impl SearchPredicate {
    pub fn new(query: &str) -> Self {
        Self {
            needle: fold_case(query),
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        fold_case(note.body()).contains(&self.needle)
    }
}

/// Upper then lower, so `ß` and `SS` fold to the same `ss`
fn fold_case(text: &str) -> String {
    text.to_uppercase().to_lowercase()
}
