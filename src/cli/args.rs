//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Scan a source tree and print the duplicate report
//! - `init`: Initialize a resdupe configuration file

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

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Config file to use instead of searching for .resdupe.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Values with at most this many characters are never value duplicates
    #[arg(long)]
    pub min_value_length: Option<usize>,

    /// Maximum number of value duplicates considered for display
    #[arg(long)]
    pub max_displayed_value_dups: Option<usize>,

    /// Value duplicates with more occurrences than this are counted but not shown
    #[arg(long)]
    pub max_occurrences_for_display: Option<usize>,

    /// Preference name marker (replaces the configured list)
    /// Can be specified multiple times: --pref-marker pref_ --pref-marker key_
    #[arg(long = "pref-marker")]
    pub pref_markers: Vec<String>,

    /// Value to ignore when looking for value duplicates (replaces the configured list)
    #[arg(long = "stoplist")]
    pub value_stoplist: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Root directory to scan (overrides config file)
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan for duplicated string resources and print a report
    Scan(ScanCommand),
    /// Initialize a new .resdupe.json configuration file
    Init,
}
