// src/application/note_exporter.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::application::{NoteRepository, NoteStore};
use crate::constants::{DEFAULT_EXPORT_PREFIX, EXPORT_EXTENSION};
use crate::domain::{DomainError, Note};

/// Serialized export ready to be written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
    pub notes: Vec<Note>,
}

pub struct NoteExporter<S: NoteStore> {
    repository: Arc<NoteRepository<S>>,
    file_prefix: String,
}

impl<S: NoteStore> NoteExporter<S> {
    pub fn new(repository: Arc<NoteRepository<S>>) -> Self {
        Self::with_prefix(repository, DEFAULT_EXPORT_PREFIX)
    }

    pub fn with_prefix(repository: Arc<NoteRepository<S>>, file_prefix: impl Into<String>) -> Self {
        Self {
            repository,
            file_prefix: file_prefix.into(),
        }
    }

    /// Collect the selected notes in stored order and serialize them as a
    /// pretty-printed JSON array.
    ///
    /// An empty selection, or one that matches no stored note, is
    /// [`DomainError::EmptySelection`] and produces nothing.
    #[instrument(level = "debug", skip(self, selected_ids), fields(selected = selected_ids.len()))]
    pub async fn export_selected(
        &self,
        selected_ids: &BTreeSet<i64>,
        date: NaiveDate,
    ) -> Result<ExportFile, DomainError> {
        if selected_ids.is_empty() {
            return Err(DomainError::EmptySelection);
        }

        let notes: Vec<Note> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|n| selected_ids.contains(&n.id))
            .collect();
        if notes.is_empty() {
            debug!("None of the selected ids exist");
            return Err(DomainError::EmptySelection);
        }

        let contents = serde_json::to_string_pretty(&notes)
            .map_err(|e| DomainError::StorageWrite(format!("Failed to serialize notes: {e}")))?;
        let file_name = format!(
            "{}_{}.{}",
            self.file_prefix,
            date.format("%Y-%m-%d"),
            EXPORT_EXTENSION
        );

        info!(count = notes.len(), %file_name, "Prepared export");
        Ok(ExportFile {
            file_name,
            contents,
            notes,
        })
    }
}
