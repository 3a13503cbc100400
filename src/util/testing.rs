// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::env;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteStore;
use crate::domain::{Clock, DomainError, Note};

/// Store double with switchable failures for exercising error paths
///
/// # Examples
///
/// ```
/// use noteclip::util::testing::MockNoteStore;
/// use noteclip::domain::Note;
///
/// let store = MockNoteStore::builder()
///     .with_note(Note::new(1, "https://a.com", "hello", "2024-01-01T00:00:00.000Z".to_string()))
///     .with_write_failure()
///     .build();
/// assert_eq!(store.set_calls(), 0);
/// ```
pub struct MockNoteStore {
    notes: Mutex<Vec<Note>>,
    fail_reads: bool,
    fail_writes: bool,
    set_calls: AtomicUsize,
}

impl MockNoteStore {
    pub fn builder() -> MockNoteStoreBuilder {
        MockNoteStoreBuilder::new()
    }

    /// Number of `set` calls, failed ones included
    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NoteStore for MockNoteStore {
    async fn get(&self) -> Result<Vec<Note>, DomainError> {
        if self.fail_reads {
            return Err(DomainError::StorageRead("simulated read failure".to_string()));
        }
        Ok(self.notes.lock().await.clone())
    }

    async fn set(&self, notes: Vec<Note>) -> Result<(), DomainError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(DomainError::StorageWrite("simulated write failure".to_string()));
        }
        *self.notes.lock().await = notes;
        Ok(())
    }
}

/// Builder for MockNoteStore
pub struct MockNoteStoreBuilder {
    notes: Vec<Note>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Append a note to the initial list (so add them newest first)
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_read_failure(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn with_write_failure(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn build(self) -> MockNoteStore {
        MockNoteStore {
            notes: Mutex::new(self.notes),
            fail_reads: self.fail_reads,
            fail_writes: self.fail_writes,
            set_calls: AtomicUsize::new(0),
        }
    }
}

impl Default for MockNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Clock that advances one millisecond on every reading
#[derive(Debug)]
pub struct SteppingClock {
    next: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(millis: i64) -> Self {
        Self {
            next: AtomicI64::new(millis),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.next.fetch_add(1, Ordering::SeqCst);
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio", "tokio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64) -> Note {
        Note::new(id, "https://a.com", "body", "d".to_string())
    }

    #[tokio::test]
    async fn given_configured_notes_when_getting_then_returns_them() {
        let store = MockNoteStore::builder()
            .with_note(note(2))
            .with_note(note(1))
            .build();

        let notes = store.get().await.expect("Get should succeed");

        assert_eq!(notes, vec![note(2), note(1)]);
    }

    #[tokio::test]
    async fn given_read_failure_when_getting_then_returns_storage_read() {
        let store = MockNoteStore::builder().with_read_failure().build();

        let result = store.get().await;

        assert!(matches!(result, Err(DomainError::StorageRead(_))));
    }

    #[tokio::test]
    async fn given_write_failure_when_setting_then_counts_call_and_keeps_notes() {
        let store = MockNoteStore::builder()
            .with_note(note(1))
            .with_write_failure()
            .build();

        let result = store.set(vec![]).await;

        assert!(matches!(result, Err(DomainError::StorageWrite(_))));
        assert_eq!(store.set_calls(), 1);
        assert_eq!(store.get().await.unwrap(), vec![note(1)]);
    }

    #[test]
    fn given_stepping_clock_when_reading_twice_then_advances_one_millisecond() {
        let clock = SteppingClock::starting_at(100);

        assert_eq!(clock.now_millis(), 100);
        assert_eq!(clock.now_millis(), 101);
    }
}
