// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to read notes from storage: {0}")]
    StorageRead(String),
    #[error("Failed to write notes to storage: {0}")]
    StorageWrite(String),
    #[error("No notes selected for export")]
    EmptySelection,
    #[error("Note text is empty")]
    EmptyInput,
}

impl DomainError {
    /// Storage failures are logged and swallowed by callers; only the empty
    /// conditions are reported back to the user.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageRead(_) | Self::StorageWrite(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_storage_errors_when_classifying_then_reports_storage() {
        assert!(DomainError::StorageRead("io".to_string()).is_storage());
        assert!(DomainError::StorageWrite("io".to_string()).is_storage());
        assert!(!DomainError::EmptySelection.is_storage());
        assert!(!DomainError::EmptyInput.is_storage());
    }
}
