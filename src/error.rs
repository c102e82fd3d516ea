//! Error types surfaced by the scanner and synchronizer.
//!
//! Every error is fatal for the run: the tool is a one-shot batch transform, so
//! failures bubble unmodified to the caller instead of being caught or retried.

use std::path::PathBuf;

use thiserror::Error;

/// Source payload for read/write failures: I/O, JSON syntax, or a
/// shape problem such as a non-object document root.
pub type FileErrorSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum SyncError {
    /// The primary language resolved to zero files on disk. The primary
    /// language defines the namespace schema, so there is nothing to sync.
    #[error("There are no files for your primary language (\"{language}\")")]
    PrimaryLanguageMissing { language: String },

    /// A locale file exists but could not be read or parsed as a JSON object.
    #[error("Failed to read locale file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: FileErrorSource,
    },

    /// An output file could not be written.
    #[error("Failed to write locale file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: FileErrorSource,
    },

    /// The locales folder matches none of the recognized layouts, or matches
    /// more than one at once.
    #[error("Unsupported locale folder layout at {}: {reason}", .folder.display())]
    UnsupportedLayout { folder: PathBuf, reason: String },
}

impl SyncError {
    pub fn file_read(path: impl Into<PathBuf>, source: impl Into<FileErrorSource>) -> Self {
        Self::FileRead {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: impl Into<FileErrorSource>) -> Self {
        Self::FileWrite {
            path: path.into(),
            source: source.into(),
        }
    }
}
