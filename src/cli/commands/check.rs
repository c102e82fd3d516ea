use std::collections::BTreeSet;

use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, resolve_options};
use crate::cli::args::CheckCommand;
use crate::core::scan;

/// Dry-run counterpart of `sync`: inspects the locales folder and reports the
/// files a sync would create, writing nothing. Useful as a CI gate.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let options = resolve_options(&cmd.args.common, None)?;
    let result = scan(
        &options.locales_folder,
        &options.primary_language,
        &options.secondary_languages,
        &options.file_extension,
    )?;

    let mut namespaces = BTreeSet::new();
    let mut missing = Vec::new();
    for records in result.files.values() {
        for (namespace, record) in records {
            namespaces.insert(namespace.clone());
            if !record.file_path.exists() {
                missing.push(record.file_path.clone());
            }
        }
    }

    let error_count = missing.len();
    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            language_count: result.files.len(),
            namespace_count: namespaces.len(),
            missing,
        }),
        error_count,
        exit_on_errors: true,
    })
}
