use noteclip::application::NoteRepository;
use noteclip::domain::Clock;
use noteclip::infrastructure::{Config, JsonFileStore};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test fixture: a note store file and an export directory inside a temp dir
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub store_path: PathBuf,
    pub export_dir: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let store_path = temp_dir.path().join("data/notes.json");
        let export_dir = temp_dir.path().join("exports");
        Ok(Self {
            _temp_dir: temp_dir,
            store_path,
            export_dir,
        })
    }

    /// Fixture whose store file already holds `content`
    pub fn with_content(content: &str) -> anyhow::Result<Self> {
        let fixture = Self::new()?;
        std::fs::create_dir_all(fixture.store_path.parent().expect("store path has parent"))?;
        std::fs::write(&fixture.store_path, content)?;
        Ok(fixture)
    }

    pub fn open_repository(&self) -> Arc<NoteRepository<JsonFileStore>> {
        Arc::new(NoteRepository::new(JsonFileStore::new(&self.store_path)))
    }

    /// Repository over the store file that reads time from `clock`
    pub fn open_repository_with_clock(
        &self,
        clock: Arc<dyn Clock>,
    ) -> Arc<NoteRepository<JsonFileStore>> {
        Arc::new(NoteRepository::with_clock(
            JsonFileStore::new(&self.store_path),
            clock,
        ))
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.storage.path = self.store_path.clone();
        config.export.directory = self.export_dir.clone();
        config
    }
}

/// Notes as the browser extension stored them, newest first
#[allow(dead_code)]
pub const EXTENSION_STORAGE: &str = r#"{
  "notes": [
    {"id": 1714564800300, "text": "https://rust-lang.org\n\nOwnership rules", "date": "2024-05-01T12:00:00.300Z"},
    {"id": 1714564800200, "text": "https://example.com\n\nA Tree is a graph", "date": "2024-05-01T12:00:00.200Z"},
    {"id": 1714564800100, "text": "https://example.com\n\nOldest note", "date": "2024-05-01T12:00:00.100Z"}
  ]
}"#;
