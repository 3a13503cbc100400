// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// Separator between the source URL and the body inside `Note::text`
pub const URL_BODY_SEPARATOR: &str = "\n\n";

/// A captured text fragment.
///
/// `text` keeps the stored encoding `"{url}\n\n{body}"`; use [`Note::source_url`]
/// and [`Note::body`] for the two parts. A body that itself contains a blank
/// line stays intact in `body()` because only the first separator splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub date: String,
}

impl Note {
    pub fn new(id: i64, source_url: &str, body: &str, date: String) -> Self {
        Self {
            id,
            text: format!("{source_url}{URL_BODY_SEPARATOR}{body}"),
            date,
        }
    }

    pub fn source_url(&self) -> &str {
        self.split().0
    }

    pub fn body(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        self.text
            .split_once(URL_BODY_SEPARATOR)
            .unwrap_or((self.text.as_str(), ""))
    }
}
