// src/application/note_capturer.rs
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{NoteRepository, NoteStore};
use crate::domain::{DomainError, Note};

/// A click on one of the extension's context-menu entries
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct MenuClick {
    pub menu_item_id: String,
    pub page_url: String,
    #[serde(default)]
    pub selection_text: Option<String>,
}

/// Turns the two capture surfaces into repository writes
pub struct NoteCapturer<S: NoteStore> {
    repository: Arc<NoteRepository<S>>,
    menu_id: String,
}

impl<S: NoteStore> NoteCapturer<S> {
    pub fn new(repository: Arc<NoteRepository<S>>, menu_id: impl Into<String>) -> Self {
        Self {
            repository,
            menu_id: menu_id.into(),
        }
    }

    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    /// Context-menu capture. Clicks on other menu entries and clicks without
    /// a selection are ignored and yield `None`.
    #[instrument(level = "debug", skip(self, click), fields(menu_item_id = %click.menu_item_id))]
    pub async fn capture_selection(&self, click: &MenuClick) -> Result<Option<Note>, DomainError> {
        if click.menu_item_id != self.menu_id {
            debug!("Click on foreign menu entry ignored");
            return Ok(None);
        }
        let Some(selection) = click.selection_text.as_deref().filter(|s| !s.is_empty()) else {
            debug!("Click without selection ignored");
            return Ok(None);
        };

        self.repository
            .add_note_verbatim(&click.page_url, selection)
            .await
            .map(Some)
    }

    /// Manual capture from the input box: first line only
    pub async fn capture_manual(&self, page_url: &str, text: &str) -> Result<Note, DomainError> {
        self.repository.add_note(page_url, text).await
    }
}
