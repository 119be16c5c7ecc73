//! Command dispatch logic for teleport

use std::time::Instant;

use crate::cli::Cli;
use teleport_core::error::{ExitCode, Result};
use tracing::debug;

mod command;

pub use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<ExitCode> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    match &cli.command {
        None => crate::commands::run::RunCommand { file: None }.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
