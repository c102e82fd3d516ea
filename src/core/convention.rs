//! Locale folder layout detection.
//!
//! Three layouts are recognized, without explicit configuration:
//!
//! - **Flat**: `{root}/{language}.json`, one file per language, no namespaces.
//! - **LanguageFirst**: `{root}/{language}/{namespace}.json`, where the
//!   namespace may be a nested path (`nested/a.json`).
//! - **NamespaceFirst**: `{root}/{namespace}/{language}.json`.
//!
//! [`classify`] is a pure function over the top-level directory listing so the
//! detection policy can be tested without touching a filesystem. The caller
//! turns [`Classification::Empty`] and [`Classification::Ambiguous`] into the
//! appropriate errors.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Detected folder layout, threaded from the scanner into output path
/// resolution so it is never inferred twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    Flat,
    LanguageFirst,
    NamespaceFirst,
}

impl Convention {
    /// Resolves the on-disk path for a language+namespace pair under `root`.
    ///
    /// The flat layout ignores the namespace (it is always `""`); nested
    /// namespace keys like `nested/a` map to nested directories.
    pub fn file_path(&self, root: &Path, language: &str, namespace: &str, extension: &str) -> PathBuf {
        match self {
            Convention::Flat => root.join(format!("{language}{extension}")),
            Convention::LanguageFirst => root
                .join(language)
                .join(format!("{namespace}{extension}")),
            Convention::NamespaceFirst => root
                .join(namespace)
                .join(format!("{language}{extension}")),
        }
    }
}

/// One top-level entry of the locales folder, as seen by [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub is_dir: bool,
}

impl FolderEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Outcome of layout detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Detected(Convention),
    /// Nothing that looks like a locale file or namespace folder.
    Empty,
    /// More than one layout matches at once; guessing a precedence would
    /// silently pick up the wrong files.
    Ambiguous { reason: String },
}

/// Classifies the top-level listing of a locales folder.
///
/// Dot-entries and files that do not carry `extension` are ignored. Detection
/// works even when some requested languages have no files yet: a single
/// language file or directory is enough to pin the layout.
pub fn classify(
    entries: &[FolderEntry],
    languages: &BTreeSet<String>,
    extension: &str,
) -> Classification {
    let mut language_files = false;
    let mut language_dirs = false;
    let mut namespace_dirs = false;

    for entry in entries {
        if entry.name.starts_with('.') {
            continue;
        }
        if entry.is_dir {
            if languages.contains(&entry.name) {
                language_dirs = true;
            } else {
                namespace_dirs = true;
            }
        } else if let Some(stem) = entry.name.strip_suffix(extension)
            && languages.contains(stem)
        {
            language_files = true;
        }
    }

    match (language_files, language_dirs, namespace_dirs) {
        (true, false, false) => Classification::Detected(Convention::Flat),
        (false, true, false) => Classification::Detected(Convention::LanguageFirst),
        (false, false, true) => Classification::Detected(Convention::NamespaceFirst),
        (false, false, false) => Classification::Empty,
        (true, _, _) => Classification::Ambiguous {
            reason: "top-level language files are mixed with directories".to_string(),
        },
        (false, true, true) => Classification::Ambiguous {
            reason: "top-level directories mix language names and namespace names".to_string(),
        },
    }
}
