//! Core sync engine: layout detection, scanning, reconciliation.

pub mod convention;
pub mod json;
pub mod record;
pub mod scanner;
pub mod sync;

pub use convention::{Classification, Convention, FolderEntry, classify};
pub use record::{LocaleData, LocaleFileMap, LocaleFileRecord, NamespaceMap, content_hash};
pub use scanner::{ScanResult, scan};
pub use sync::{SyncOptions, SyncReport, synchronize};
