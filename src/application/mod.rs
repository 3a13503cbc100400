// src/application/mod.rs
pub mod background;
pub mod note_capturer;
pub mod note_exporter;
pub mod note_lister;
pub mod note_repository;

pub use background::{Background, BackgroundEvent, ContextMenuItem, MenuContext};
pub use note_capturer::{MenuClick, NoteCapturer};
pub use note_exporter::{ExportFile, NoteExporter};
pub use note_lister::NoteListView;
pub use note_repository::{NoteRepository, NoteStore, SearchPredicate};
