// src/ports/list.rs
use crate::application::NoteListView;
use crate::domain::Note;
use crate::util::text::display_line;

/// Plain-text rendering of the note list
#[derive(Debug, Default)]
pub struct ListPresenter;

impl ListPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One block per visible note: checkbox, id and date, then the source
    /// URL and the first line of the body
    pub fn render(&self, view: &NoteListView) -> String {
        let mut out = String::new();
        for note in view.visible() {
            self.render_note(&mut out, note, view.is_selected(note.id));
        }
        if out.is_empty() {
            out.push_str("No notes\n");
        }
        out
    }

    fn render_note(&self, out: &mut String, note: &Note, checked: bool) {
        let mark = if checked { 'x' } else { ' ' };
        out.push_str(&format!("[{mark}] {}  {}\n", note.id, note.date));
        out.push_str(&format!("    {}\n", note.source_url()));
        out.push_str(&format!("    {}\n", display_line(note.body())));
    }

    /// Visible notes in their stored shape, as pretty JSON
    pub fn render_json(&self, view: &NoteListView) -> serde_json::Result<String> {
        let notes: Vec<&Note> = view.visible().collect();
        serde_json::to_string_pretty(&notes)
    }
}
