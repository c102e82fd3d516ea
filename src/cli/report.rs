//! Report formatting and printing utilities.
//!
//! Displays command results in a compact, colored format. Separate from the
//! core logic so locsync can be used as a library without pulling terminal
//! output into the sync path.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, FileAction, InitSummary, SyncSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Length of the hash prefix shown in verbose file listings.
const SHORT_HASH_LEN: usize = 8;

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Sync(summary) => print_sync(summary, verbose, writer),
        CommandSummary::Check(summary) => print_check(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_sync<W: Write>(summary: &SyncSummary, verbose: bool, writer: &mut W) {
    if verbose {
        print_file_table(summary, writer);
    }

    let msg = format!(
        "Synced {}, {} - created {}, preserved {}",
        count_noun(summary.language_count, "language"),
        count_noun(summary.namespace_count, "namespace"),
        count_noun(summary.created_count, "file"),
        count_noun(summary.preserved_count, "file"),
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// One line per file: action, path, and the short content hash (or `-` for an
/// empty document).
fn print_file_table<W: Write>(summary: &SyncSummary, writer: &mut W) {
    let path_width = summary
        .files
        .iter()
        .map(|file| file.path.display().to_string().width())
        .max()
        .unwrap_or(0);

    for file in &summary.files {
        let path = file.path.display().to_string();
        let padding = " ".repeat(path_width.saturating_sub(path.width()));
        let hash = if file.hash.is_empty() {
            "-"
        } else {
            &file.hash[..SHORT_HASH_LEN.min(file.hash.len())]
        };
        let action = match file.action {
            FileAction::Created => format!("{:>9}", file.action.as_str()).green(),
            FileAction::Preserved => format!("{:>9}", file.action.as_str()).dimmed(),
        };
        let _ = writeln!(writer, "{} {}{} {}", action, path, padding, hash.dimmed());
    }
}

fn print_check<W: Write>(summary: &CheckSummary, writer: &mut W) {
    if summary.missing.is_empty() {
        let msg = format!(
            "Checked {}, {} - nothing to create",
            count_noun(summary.language_count, "language"),
            count_noun(summary.namespace_count, "namespace"),
        );
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
        return;
    }

    for path in &summary.missing {
        let _ = writeln!(
            writer,
            "{} {}",
            "missing:".bold().red(),
            path.display()
        );
    }
    let msg = format!(
        "{} missing - run {} to create placeholders",
        count_noun(summary.missing.len(), "locale file"),
        "locsync sync".cyan(),
    );
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), msg.red());
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
