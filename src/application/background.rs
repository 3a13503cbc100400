// src/application/background.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, warn};

use crate::application::{MenuClick, NoteCapturer, NoteStore};
use crate::domain::{DomainError, Note};

/// Page contexts a menu entry can be shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuContext {
    Selection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuItem {
    pub id: String,
    pub title: String,
    pub contexts: Vec<MenuContext>,
}

/// Events delivered to the background process, one JSON object per line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundEvent {
    /// Extension installed or started; registers the context menu
    Installed,
    MenuClicked(MenuClick),
    /// Free-form message from page content; only logged
    Message { payload: Value },
}

/// Background process: owns the context-menu registration and routes
/// events to the capturer
pub struct Background<S: NoteStore> {
    capturer: NoteCapturer<S>,
    menu_title: String,
    menu: Vec<ContextMenuItem>,
}

impl<S: NoteStore> Background<S> {
    pub fn new(capturer: NoteCapturer<S>, menu_title: impl Into<String>) -> Self {
        Self {
            capturer,
            menu_title: menu_title.into(),
            menu: Vec::new(),
        }
    }

    pub fn menu(&self) -> &[ContextMenuItem] {
        &self.menu
    }

    pub async fn handle(&mut self, event: BackgroundEvent) -> Result<Option<Note>, DomainError> {
        match event {
            BackgroundEvent::Installed => {
                self.register_menu();
                Ok(None)
            }
            BackgroundEvent::MenuClicked(click) => self.capturer.capture_selection(&click).await,
            BackgroundEvent::Message { payload } => {
                info!(%payload, "Received message");
                Ok(None)
            }
        }
    }

    fn register_menu(&mut self) {
        let id = self.capturer.menu_id();
        if self.menu.iter().any(|item| item.id == id) {
            debug!(menu_id = id, "Context menu already registered");
            return;
        }
        self.menu.push(ContextMenuItem {
            id: id.to_string(),
            title: self.menu_title.clone(),
            contexts: vec![MenuContext::Selection],
        });
        info!(menu_id = id, "Registered context menu");
    }

    /// Read newline-delimited JSON events until EOF.
    ///
    /// Malformed lines and storage failures are logged and skipped; the loop
    /// only ends early on an I/O error from the reader. Returns the number of
    /// notes captured.
    pub async fn run<R>(&mut self, reader: R) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut captured = 0;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let event: BackgroundEvent = match serde_json::from_str(line) {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "Skipping malformed event");
                    continue;
                }
            };
            match self.handle(event).await {
                Ok(Some(note)) => {
                    captured += 1;
                    debug!(note_id = note.id, "Captured from menu click");
                }
                Ok(None) => {}
                Err(e) => error!(error = %e, "Event handling failed"),
            }
        }

        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::NoteRepository;
    use crate::infrastructure::InMemoryStore;
    use crate::util::testing::MockNoteStore;
    use std::sync::Arc;

    fn background() -> (Background<InMemoryStore>, Arc<NoteRepository<InMemoryStore>>) {
        let repository = Arc::new(NoteRepository::new(InMemoryStore::new()));
        let capturer = NoteCapturer::new(Arc::clone(&repository), "addToNotes");
        (Background::new(capturer, "Add to notes"), repository)
    }

    #[tokio::test]
    async fn given_install_events_when_handling_then_registers_menu_once() {
        // Arrange
        let (mut background, _) = background();

        // Act
        background.handle(BackgroundEvent::Installed).await.unwrap();
        background.handle(BackgroundEvent::Installed).await.unwrap();

        // Assert
        assert_eq!(
            background.menu(),
            &[ContextMenuItem {
                id: "addToNotes".to_string(),
                title: "Add to notes".to_string(),
                contexts: vec![MenuContext::Selection],
            }]
        );
    }

    #[tokio::test]
    async fn given_message_event_when_handling_then_stores_nothing() {
        let (mut background, repository) = background();

        let result = background
            .handle(BackgroundEvent::Message {
                payload: serde_json::json!({"hello": "world"}),
            })
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(repository.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn given_event_stream_when_running_then_captures_clicks_and_skips_garbage() {
        // Arrange
        let (mut background, repository) = background();
        let input = concat!(
            r#"{"type": "installed"}"#, "\n",
            "not json\n",
            "\n",
            r#"{"type": "menu_clicked", "menu_item_id": "addToNotes", "page_url": "https://a.com", "selection_text": "hello\nworld"}"#, "\n",
            r#"{"type": "menu_clicked", "menu_item_id": "other", "page_url": "https://b.com", "selection_text": "x"}"#, "\n",
            r#"{"type": "message", "payload": 42}"#, "\n",
        );

        // Act
        let captured = background.run(input.as_bytes()).await.unwrap();

        // Assert
        assert_eq!(captured, 1);
        assert_eq!(background.menu().len(), 1);
        let notes = repository.list_all().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "https://a.com\n\nhello\nworld");
    }

    #[tokio::test]
    async fn given_failing_store_when_running_then_logs_and_continues() {
        let repository = Arc::new(NoteRepository::new(
            MockNoteStore::builder().with_write_failure().build(),
        ));
        let capturer = NoteCapturer::new(Arc::clone(&repository), "addToNotes");
        let mut background = Background::new(capturer, "Add to notes");
        let input = concat!(
            r#"{"type": "menu_clicked", "menu_item_id": "addToNotes", "page_url": "https://a.com", "selection_text": "one"}"#, "\n",
            r#"{"type": "menu_clicked", "menu_item_id": "addToNotes", "page_url": "https://a.com", "selection_text": "two"}"#, "\n",
        );

        let captured = background.run(input.as_bytes()).await.unwrap();

        assert_eq!(captured, 0);
        assert_eq!(repository.store().set_calls(), 2);
    }
}
