// src/infrastructure/memory.rs
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::NoteStore;
use crate::domain::{DomainError, Note};

/// Process-local store; nothing survives the process
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: RwLock<Option<Vec<Note>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(Some(notes)),
        }
    }
}

#[async_trait]
impl NoteStore for InMemoryStore {
    async fn get(&self) -> Result<Vec<Note>, DomainError> {
        Ok(self.notes.read().await.clone().unwrap_or_default())
    }

    async fn set(&self, notes: Vec<Note>) -> Result<(), DomainError> {
        *self.notes.write().await = Some(notes);
        Ok(())
    }
}
