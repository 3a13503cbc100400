// src/infrastructure/export_writer.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::application::ExportFile;

/// Write an export into `directory`, creating it if needed.
///
/// An existing file of the same name (same day) is overwritten.
pub async fn write_export(directory: &Path, file: &ExportFile) -> Result<PathBuf> {
    tokio::fs::create_dir_all(directory)
        .await
        .with_context(|| format!("Failed to create export directory {}", directory.display()))?;

    let path = directory.join(&file.file_name);
    tokio::fs::write(&path, file.contents.as_bytes())
        .await
        .with_context(|| format!("Failed to write export file {}", path.display()))?;

    info!(?path, count = file.notes.len(), "Exported notes");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn export_file() -> ExportFile {
        ExportFile {
            file_name: "notes_2024-05-01.json".to_string(),
            contents: "[]".to_string(),
            notes: vec![],
        }
    }

    #[tokio::test]
    async fn given_missing_directory_when_writing_then_creates_it() {
        let temp_dir = TempDir::new().unwrap();
        let directory = temp_dir.path().join("exports");

        let path = write_export(&directory, &export_file()).await.unwrap();

        assert_eq!(path, directory.join("notes_2024-05-01.json"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }
}
