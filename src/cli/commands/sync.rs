use std::collections::BTreeSet;

use anyhow::Result;

use super::{
    CommandResult, CommandSummary, FileAction, SyncSummary, SyncedFile, resolve_options,
};
use crate::cli::args::SyncCommand;
use crate::core::synchronize;

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let options = resolve_options(&cmd.args.common, cmd.args.output_folder.as_deref())?;
    let report = synchronize(&options)?;

    let created: BTreeSet<_> = report.created.iter().cloned().collect();
    let mut namespaces = BTreeSet::new();
    let mut files = Vec::new();
    for records in report.files.values() {
        for (namespace, record) in records {
            namespaces.insert(namespace.clone());
            let action = if created.contains(&record.file_path) {
                FileAction::Created
            } else {
                FileAction::Preserved
            };
            files.push(SyncedFile {
                action,
                path: record.file_path.clone(),
                hash: record.hash.clone(),
            });
        }
    }

    Ok(CommandResult {
        summary: CommandSummary::Sync(SyncSummary {
            language_count: report.files.len(),
            namespace_count: namespaces.len(),
            created_count: report.created.len(),
            preserved_count: report.preserved.len(),
            files,
        }),
        error_count: 0,
        exit_on_errors: true,
    })
}
