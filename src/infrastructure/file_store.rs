// src/infrastructure/file_store.rs
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::application::NoteStore;
use crate::constants::DEFAULT_STORAGE_KEY;
use crate::domain::{DomainError, Note};

/// JSON object file used as a key-value store.
///
/// The note list lives under a single key; any other keys in the file are
/// carried over untouched on write. Writes land in a sibling temp file that is
/// renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_object(&self) -> Result<Map<String, Value>, DomainError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = ?self.path, "Store file missing, treating as empty");
                return Ok(Map::new());
            }
            Err(e) => {
                return Err(DomainError::StorageRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            DomainError::StorageRead(format!("{}: invalid JSON: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl NoteStore for JsonFileStore {
    #[instrument(level = "debug", skip(self), fields(path = ?self.path))]
    async fn get(&self) -> Result<Vec<Note>, DomainError> {
        let mut object = self.read_object().await?;
        match object.remove(&self.key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                DomainError::StorageRead(format!(
                    "{}: malformed '{}' entry: {}",
                    self.path.display(),
                    self.key,
                    e
                ))
            }),
        }
    }

    #[instrument(level = "debug", skip(self, notes), fields(path = ?self.path, count = notes.len()))]
    async fn set(&self, notes: Vec<Note>) -> Result<(), DomainError> {
        let mut object = match self.read_object().await {
            Ok(object) => object,
            Err(DomainError::StorageRead(msg)) => return Err(DomainError::StorageWrite(msg)),
            Err(e) => return Err(e),
        };

        let value = serde_json::to_value(&notes)
            .map_err(|e| DomainError::StorageWrite(e.to_string()))?;
        object.insert(self.key.clone(), value);

        let json = serde_json::to_string_pretty(&object)
            .map_err(|e| DomainError::StorageWrite(e.to_string()))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, json.as_bytes()))
            .await
            .map_err(|e| DomainError::StorageWrite(e.to_string()))?
            .map_err(|e| DomainError::StorageWrite(format!("{}: {}", self.path.display(), e)))
    }
}

fn write_atomically(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
