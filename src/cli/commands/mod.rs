//! Command handlers and their result types.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::SyncOptions;

pub mod check;
pub mod sync;

pub use check::check;
pub use sync::sync;

/// What happened to one locale file during a sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Created,
    Preserved,
}

impl FileAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileAction::Created => "created",
            FileAction::Preserved => "preserved",
        }
    }
}

/// Per-file outcome, shown in verbose output together with the content hash.
#[derive(Debug)]
pub struct SyncedFile {
    pub action: FileAction,
    pub path: PathBuf,
    pub hash: String,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub language_count: usize,
    pub namespace_count: usize,
    pub created_count: usize,
    pub preserved_count: usize,
    pub files: Vec<SyncedFile>,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub language_count: usize,
    pub namespace_count: usize,
    /// Files a sync run would create.
    pub missing: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

/// Result of running a locsync command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, a failure exit code should be returned when error_count > 0.
    pub exit_on_errors: bool,
}

/// Merges the config file with CLI overrides into resolved sync options.
///
/// The primary language is dropped from the secondary list, duplicates keep
/// their first occurrence, and the merged values are validated the same way a
/// config file is.
pub(crate) fn resolve_options(
    common: &CommonArgs,
    output_folder: Option<&Path>,
) -> Result<SyncOptions> {
    let loaded = load_config(Path::new("."))?;

    let merged = Config {
        primary_language: common
            .primary_language
            .clone()
            .unwrap_or(loaded.config.primary_language),
        other_languages: if common.languages.is_empty() {
            loaded.config.other_languages
        } else {
            common.languages.clone()
        },
        locales_folder: loaded.config.locales_folder,
        output_folder: loaded.config.output_folder,
        file_extension: common
            .extension
            .clone()
            .unwrap_or(loaded.config.file_extension),
    };
    merged.validate()?;

    let locales_folder = common
        .locales_folder
        .clone()
        .unwrap_or_else(|| PathBuf::from(&merged.locales_folder));
    let output_folder = output_folder
        .map(Path::to_path_buf)
        .or_else(|| merged.output_folder.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| locales_folder.clone());

    let mut seen = BTreeSet::new();
    let secondary_languages: Vec<String> = merged
        .other_languages
        .iter()
        .filter(|language| *language != &merged.primary_language)
        .filter(|language| seen.insert((*language).clone()))
        .cloned()
        .collect();

    Ok(SyncOptions {
        primary_language: merged.primary_language,
        secondary_languages,
        locales_folder,
        output_folder,
        file_extension: merged.file_extension,
    })
}
