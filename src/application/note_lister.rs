// src/application/note_lister.rs
use std::collections::BTreeSet;

use crate::application::{NoteRepository, NoteStore, SearchPredicate};
use crate::domain::{DomainError, Note};

/// State of the note list as shown to the user: the loaded notes, which of
/// them are checked, and the live filter.
///
/// Filtering only hides notes; it never changes what is stored or checked.
#[derive(Debug, Clone, Default)]
pub struct NoteListView {
    notes: Vec<Note>,
    selected: BTreeSet<i64>,
    filter: Option<SearchPredicate>,
}

impl NoteListView {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    /// Load the `limit` most recent notes, or all of them when `limit` is `None`
    pub async fn load<S: NoteStore>(
        repository: &NoteRepository<S>,
        limit: Option<usize>,
    ) -> Result<Self, DomainError> {
        let notes = match limit {
            Some(n) => repository.list_recent(n).await?,
            None => repository.list_all().await?,
        };
        Ok(Self::new(notes))
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter = if query.is_empty() {
            None
        } else {
            Some(SearchPredicate::new(query))
        };
    }

    /// Flip the checkbox of a loaded note. Unknown ids are ignored.
    pub fn toggle(&mut self, id: i64) {
        if !self.notes.iter().any(|n| n.id == id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> &BTreeSet<i64> {
        &self.selected
    }

    /// Drop a note after it was deleted from the store
    pub fn remove(&mut self, id: i64) {
        self.notes.retain(|n| n.id != id);
        self.selected.remove(&id);
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes passing the current filter, in list order
    pub fn visible(&self) -> impl Iterator<Item = &Note> {
        self.notes
            .iter()
            .filter(|n| self.filter.as_ref().map_or(true, |f| f.matches(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryStore;

    fn notes() -> Vec<Note> {
        vec![
            Note::new(3, "https://a.com", "What is a Tree?", "d".to_string()),
            Note::new(2, "https://tree.org", "What is a Graph?", "d".to_string()),
            Note::new(1, "https://a.com", "Old note", "d".to_string()),
        ]
    }

    #[tokio::test]
    async fn given_limit_when_loading_then_keeps_most_recent() {
        // Arrange
        let repo = NoteRepository::new(InMemoryStore::with_notes(notes()));

        // Act
        let view = NoteListView::load(&repo, Some(2)).await.unwrap();

        // Assert
        let ids: Vec<i64> = view.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn given_no_limit_when_loading_then_keeps_all() {
        let repo = NoteRepository::new(InMemoryStore::with_notes(notes()));

        let view = NoteListView::load(&repo, None).await.unwrap();

        assert_eq!(view.notes().len(), 3);
    }

    #[test]
    fn given_query_when_filtering_then_matches_body_not_url() {
        // Arrange
        let mut view = NoteListView::new(notes());

        // Act
        view.set_query("TREE");

        // Assert
        let ids: Vec<i64> = view.visible().map(|n| n.id).collect();
        assert_eq!(ids, vec![3]);
        assert_eq!(view.notes().len(), 3);
    }

    #[test]
    fn given_cleared_query_when_filtering_then_shows_everything() {
        let mut view = NoteListView::new(notes());
        view.set_query("tree");

        view.set_query("");

        assert_eq!(view.visible().count(), 3);
    }

    #[test]
    fn given_toggles_when_selecting_then_tracks_checked_ids() {
        let mut view = NoteListView::new(notes());

        view.toggle(3);
        view.toggle(1);
        view.toggle(1);
        view.toggle(99);

        assert_eq!(view.selected(), &BTreeSet::from([3]));
        assert!(view.is_selected(3));
        assert!(!view.is_selected(99));
    }

    #[test]
    fn given_selected_note_when_removing_then_drops_note_and_selection() {
        let mut view = NoteListView::new(notes());
        view.toggle(2);

        view.remove(2);

        assert!(view.selected().is_empty());
        assert_eq!(view.notes().len(), 2);
    }
}
