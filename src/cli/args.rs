//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report AMD `define()` calls and whether they can be converted
//! - `fix`: Rewrite convertible `define()` calls to import/export
//! - `init`: Initialize the unamd configuration file

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
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Files or directories to scan (default: the config's includes)
    pub paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report AMD define() calls and whether they can be converted
    Check(CheckCommand),
    /// Rewrite convertible define() calls to import/export
    Fix(FixCommand),
    /// Initialize the unamd configuration file
    Init,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write converted files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}
