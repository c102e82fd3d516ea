//! Locale synchronizer.
//!
//! Projects the primary language's namespace schema onto every secondary
//! language: existing files are preserved untouched, missing ones are created
//! as empty placeholder documents. Writing is idempotent; a second run over an
//! unchanged tree writes nothing.

use std::path::PathBuf;

use crate::core::convention::Convention;
use crate::core::json;
use crate::core::record::{LocaleFileMap, LocaleFileRecord, NamespaceMap};
use crate::core::scanner::scan;
use crate::error::SyncError;

/// Resolved invocation parameters for one sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub primary_language: String,
    /// Secondary languages in the order they should be processed.
    pub secondary_languages: Vec<String>,
    pub locales_folder: PathBuf,
    /// Destination root. Equal to `locales_folder` for an in-place fill.
    pub output_folder: PathBuf,
    pub file_extension: String,
}

impl SyncOptions {
    pub fn is_in_place(&self) -> bool {
        self.locales_folder == self.output_folder
    }
}

/// What the run did, for reporting.
#[derive(Debug)]
pub struct SyncReport {
    /// The reconciled map covering primary and all secondaries, with records
    /// pointing at their output locations.
    pub files: LocaleFileMap,
    pub convention: Convention,
    /// Files written by this run (placeholders included).
    pub created: Vec<PathBuf>,
    /// Files that already existed at the destination and were left untouched.
    pub preserved: Vec<PathBuf>,
}

/// Scans the locales folder and writes the reconciled tree to the output
/// folder.
///
/// Existing destination files are never overwritten or pruned; the sync only
/// guarantees that every language+namespace pair has a file, so translators
/// get a placeholder to fill in. A failed write aborts the run with
/// [`SyncError::FileWrite`]; files written before the failure stay in place.
pub fn synchronize(options: &SyncOptions) -> Result<SyncReport, SyncError> {
    let source = scan(
        &options.locales_folder,
        &options.primary_language,
        &options.secondary_languages,
        &options.file_extension,
    )?;

    let in_place = options.is_in_place();
    let mut files = LocaleFileMap::new();
    let mut created = Vec::new();
    let mut preserved = Vec::new();

    // Primary first, then secondaries in configured order. The scanner has
    // already unioned namespaces, so iterating records per language covers the
    // whole schema.
    for language in ordered_languages(options) {
        let Some(records) = source.files.get(language) else {
            continue;
        };
        let mut synced = NamespaceMap::new();
        for (namespace, record) in records {
            let output_path = if in_place {
                record.file_path.clone()
            } else {
                source.convention.file_path(
                    &options.output_folder,
                    language,
                    namespace,
                    &options.file_extension,
                )
            };
            let result = reconcile_one(record, output_path, in_place, &mut created, &mut preserved)?;
            synced.insert(namespace.clone(), result);
        }
        files.insert(language.to_string(), synced);
    }

    Ok(SyncReport {
        files,
        convention: source.convention,
        created,
        preserved,
    })
}

fn ordered_languages(options: &SyncOptions) -> impl Iterator<Item = &str> {
    std::iter::once(options.primary_language.as_str())
        .chain(options.secondary_languages.iter().map(String::as_str))
}

fn reconcile_one(
    record: &LocaleFileRecord,
    output_path: PathBuf,
    in_place: bool,
    created: &mut Vec<PathBuf>,
    preserved: &mut Vec<PathBuf>,
) -> Result<LocaleFileRecord, SyncError> {
    if output_path.exists() {
        // Never overwrite what is already at the destination. In-place the
        // scanner has just read it; across folders the destination may differ
        // from the source, so re-read to return what is actually on disk.
        let data = if in_place {
            record.data.clone()
        } else {
            json::read_locale_file(&output_path)?
        };
        preserved.push(output_path.clone());
        return Ok(LocaleFileRecord::from_data(data, output_path));
    }

    json::write_locale_file(&output_path, &record.data)?;
    created.push(output_path.clone());
    Ok(LocaleFileRecord {
        data: record.data.clone(),
        hash: record.hash.clone(),
        file_path: output_path,
    })
}
