//! Raw read/parse and serialize/write primitives for locale files.
//!
//! The scanner and synchronizer consume these as plain collaborators; every
//! failure carries the offending path and aborts the run.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::core::record::LocaleData;
use crate::error::SyncError;

/// Reads and parses a locale file. The document root must be a JSON object.
pub fn read_locale_file(path: &Path) -> Result<LocaleData, SyncError> {
    let content = fs::read_to_string(path).map_err(|source| SyncError::file_read(path, source))?;

    let value: Value =
        serde_json::from_str(&content).map_err(|source| SyncError::file_read(path, source))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SyncError::file_read(
            path,
            "root of a locale file must be a JSON object",
        )),
    }
}

/// Writes a locale document with 2-space indentation and a trailing newline,
/// creating parent directories as needed. An empty document is written as
/// `{}` so the file still exists as a to-do marker for translators.
pub fn write_locale_file(path: &Path, data: &LocaleData) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SyncError::file_write(path, source))?;
    }

    let content = serde_json::to_string_pretty(data)
        .map_err(|source| SyncError::file_write(path, source))?;

    fs::write(path, format!("{}\n", content)).map_err(|source| SyncError::file_write(path, source))
}
