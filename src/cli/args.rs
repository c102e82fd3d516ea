//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all locsync
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `sync`: Project the primary language's namespaces onto every secondary
//!   language, creating placeholder files where translations are missing
//! - `check`: Report the placeholder files a sync would create, without writing
//! - `init`: Initialize a locsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Sync(cmd)) => cmd.args.common.verbose,
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the sync and check commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Primary language whose files define the namespace schema (overrides config file)
    #[arg(long)]
    pub primary_language: Option<String>,

    /// Secondary languages to reconcile, comma-separated (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Locale folder to scan (overrides config file)
    #[arg(long)]
    pub locales_folder: Option<PathBuf>,

    /// Extension of translation files, e.g. ".json" (overrides config file)
    #[arg(long)]
    pub extension: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Folder to write the reconciled tree to (defaults to the locales folder)
    #[arg(long)]
    pub output_folder: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub args: SyncArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sync locale files: fill every language with the primary's namespaces
    Sync(SyncCommand),
    /// Report missing locale files without writing anything
    Check(CheckCommand),
    /// Initialize a new .locsyncrc.json configuration file
    Init,
}
