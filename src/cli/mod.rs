//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: One handler per subcommand
//! - `report`: Plain-text rendering of the duplicate report
//! - `exit_status`: Process exit codes

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
