// src/constants.rs
//
// Application-wide defaults. Each can be overridden from the config file
// unless noted otherwise.

/// Key under which the note list is stored in the key-value file.
///
/// Matches the key the browser extension used in its synced storage, so an
/// exported storage dump can be pointed at directly.
pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Number of notes shown by `list` without `--all`.
pub const DEFAULT_RECENT_LIMIT: usize = 2;

/// Id of the context-menu entry that captures a selection.
///
/// Menu clicks carrying any other id are ignored by the background handler.
pub const DEFAULT_MENU_ID: &str = "addToNotes";

/// Label of the context-menu entry.
pub const DEFAULT_MENU_TITLE: &str = "Add to notes";

/// Export file names are `{prefix}_{YYYY-MM-DD}.json`.
pub const DEFAULT_EXPORT_PREFIX: &str = "notes";

/// Extension of the export file.
///
/// Not configurable: the file content is always JSON.
pub const EXPORT_EXTENSION: &str = "json";

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "noteclip";
