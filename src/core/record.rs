//! In-memory representation of locale files.
//!
//! A [`LocaleFileMap`] is the normalized view of a locale folder: language →
//! namespace → file record. It is rebuilt fresh on every run; nothing persists
//! between invocations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{Map, Value};

/// Parsed content of one locale file: an ordered, possibly nested JSON object.
///
/// The shape is user-defined per project, so the value side stays opaque
/// (`serde_json::Value`) rather than a fixed record type.
pub type LocaleData = Map<String, Value>;

/// Namespace → record for a single language.
pub type NamespaceMap = BTreeMap<String, LocaleFileRecord>;

/// Language → namespace → record.
///
/// Namespace keys are logical paths with `/` separators (`"common"`,
/// `"nested/a"`); the flat layout uses the empty string. A namespace that is
/// missing on disk is always present in the map as a placeholder record, never
/// omitted.
pub type LocaleFileMap = BTreeMap<String, NamespaceMap>;

/// One locale file, existing or not yet created.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleFileRecord {
    /// Parsed key→value content. Empty when the file does not exist.
    pub data: LocaleData,
    /// Content digest, `""` when `data` is empty. Display-only: it lets the
    /// verbose report show what changed, it is never compared for correctness.
    pub hash: String,
    /// Where the record was read from, or where it will be written.
    pub file_path: PathBuf,
}

impl LocaleFileRecord {
    /// Record for a file that was read from disk.
    pub fn from_data(data: LocaleData, file_path: impl Into<PathBuf>) -> Self {
        let hash = content_hash(&data);
        Self {
            data,
            hash,
            file_path: file_path.into(),
        }
    }

    /// Record for a namespace known to exist in the schema but absent on disk
    /// for this language.
    pub fn placeholder(file_path: impl Into<PathBuf>) -> Self {
        Self {
            data: Map::new(),
            hash: String::new(),
            file_path: file_path.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.data.is_empty()
    }
}

/// Stable digest of a locale document, `""` for empty data.
pub fn content_hash(data: &LocaleData) -> String {
    if data.is_empty() {
        return String::new();
    }
    // Serializing an in-memory map is infallible.
    let bytes = serde_json::to_vec(data).unwrap_or_default();
    blake3::hash(&bytes).to_hex().to_string()
}
