//! Locale folder scanner.
//!
//! Walks a locales folder, detects its layout and produces a normalized
//! [`LocaleFileMap`] covering every requested language. The map is
//! namespace-complete: a namespace found on disk for any language is present
//! for all of them, with placeholder records standing in for missing files.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::core::convention::{Classification, Convention, FolderEntry, classify};
use crate::core::json;
use crate::core::record::{LocaleFileMap, LocaleFileRecord, NamespaceMap};
use crate::error::SyncError;
use crate::utils::path_key;

/// Scanner output: the normalized map plus the detected layout, which the
/// synchronizer reuses for output path resolution.
#[derive(Debug)]
pub struct ScanResult {
    pub files: LocaleFileMap,
    pub convention: Convention,
}

/// Scans `locales_folder` for the primary and secondary languages.
///
/// Fails with [`SyncError::PrimaryLanguageMissing`] when the primary language
/// has no files on disk (the primary defines the schema, so an empty primary
/// is a configuration error, not a partial result) and with
/// [`SyncError::UnsupportedLayout`] when the folder matches more than one
/// layout at once.
pub fn scan(
    locales_folder: &Path,
    primary_language: &str,
    other_languages: &[String],
    extension: &str,
) -> Result<ScanResult, SyncError> {
    let mut languages: Vec<String> = vec![primary_language.to_string()];
    for language in other_languages {
        if !languages.contains(language) {
            languages.push(language.clone());
        }
    }
    let known: BTreeSet<String> = languages.iter().cloned().collect();

    // A folder that does not exist yields no files at all, which is the same
    // configuration error as an empty one.
    if !locales_folder.is_dir() {
        return Err(SyncError::PrimaryLanguageMissing {
            language: primary_language.to_string(),
        });
    }

    let convention = match classify(&top_level_entries(locales_folder)?, &known, extension) {
        Classification::Detected(convention) => convention,
        Classification::Empty => {
            return Err(SyncError::PrimaryLanguageMissing {
                language: primary_language.to_string(),
            });
        }
        Classification::Ambiguous { reason } => {
            return Err(SyncError::UnsupportedLayout {
                folder: locales_folder.to_path_buf(),
                reason,
            });
        }
    };

    let discovered = match convention {
        Convention::Flat => collect_flat(locales_folder, &languages, extension)?,
        Convention::LanguageFirst => {
            collect_language_first(locales_folder, &languages, extension)?
        }
        Convention::NamespaceFirst => {
            collect_namespace_first(locales_folder, &known, extension)?
        }
    };

    if discovered
        .get(primary_language)
        .is_none_or(NamespaceMap::is_empty)
    {
        return Err(SyncError::PrimaryLanguageMissing {
            language: primary_language.to_string(),
        });
    }

    let namespaces: BTreeSet<String> = discovered
        .values()
        .flat_map(|records| records.keys().cloned())
        .collect();

    let mut files = LocaleFileMap::new();
    for language in &languages {
        let mut records = discovered.get(language).cloned().unwrap_or_default();
        for namespace in &namespaces {
            if !records.contains_key(namespace) {
                let path = convention.file_path(locales_folder, language, namespace, extension);
                records.insert(namespace.clone(), LocaleFileRecord::placeholder(path));
            }
        }
        files.insert(language.clone(), records);
    }

    Ok(ScanResult { files, convention })
}

fn top_level_entries(folder: &Path) -> Result<Vec<FolderEntry>, SyncError> {
    let mut entries = Vec::new();
    let dir = fs::read_dir(folder).map_err(|source| SyncError::file_read(folder, source))?;
    for entry in dir {
        let entry = entry.map_err(|source| SyncError::file_read(folder, source))?;
        let file_type = entry
            .file_type()
            .map_err(|source| SyncError::file_read(entry.path(), source))?;
        entries.push(FolderEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir: file_type.is_dir(),
        });
    }
    Ok(entries)
}

/// `{root}/{language}.json`; the single namespace is the empty string.
fn collect_flat(
    root: &Path,
    languages: &[String],
    extension: &str,
) -> Result<LocaleFileMap, SyncError> {
    let mut discovered = LocaleFileMap::new();
    for language in languages {
        let path = root.join(format!("{language}{extension}"));
        if !path.is_file() {
            continue;
        }
        let data = json::read_locale_file(&path)?;
        discovered
            .entry(language.clone())
            .or_default()
            .insert(String::new(), LocaleFileRecord::from_data(data, path));
    }
    Ok(discovered)
}

/// `{root}/{language}/{namespace}.json`, namespaces possibly nested.
fn collect_language_first(
    root: &Path,
    languages: &[String],
    extension: &str,
) -> Result<LocaleFileMap, SyncError> {
    let mut discovered = LocaleFileMap::new();
    for language in languages {
        let language_dir = root.join(language);
        if !language_dir.is_dir() {
            continue;
        }
        let mut records = NamespaceMap::new();
        for entry in WalkDir::new(&language_dir) {
            let entry =
                entry.map_err(|source| SyncError::file_read(language_dir.clone(), source))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&language_dir)
                .unwrap_or(entry.path());
            let Some(namespace) = path_key(relative).strip_suffix(extension).map(String::from)
            else {
                continue;
            };
            let data = json::read_locale_file(entry.path())?;
            records.insert(namespace, LocaleFileRecord::from_data(data, entry.path()));
        }
        if !records.is_empty() {
            discovered.insert(language.clone(), records);
        }
    }
    Ok(discovered)
}

/// `{root}/{namespace}/{language}.json`, namespace directories possibly nested.
fn collect_namespace_first(
    root: &Path,
    languages: &BTreeSet<String>,
    extension: &str,
) -> Result<LocaleFileMap, SyncError> {
    let mut discovered = LocaleFileMap::new();
    for entry in WalkDir::new(root).min_depth(2) {
        let entry = entry.map_err(|source| SyncError::file_read(root, source))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        let Some(language) = name.strip_suffix(extension) else {
            continue;
        };
        if !languages.contains(language) {
            continue;
        }
        let namespace = entry
            .path()
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .map(path_key)
            .unwrap_or_default();
        let data = json::read_locale_file(entry.path())?;
        discovered
            .entry(language.to_string())
            .or_default()
            .insert(namespace, LocaleFileRecord::from_data(data, entry.path()));
    }
    Ok(discovered)
}
