//! `teleport run`: interactive or scripted session

use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::commands::dispatch::{Command, CommandContext};
use teleport_core::error::{ExitCode, Result};
use teleport_core::session::Session;

pub struct RunCommand {
    pub file: Option<PathBuf>,
}

impl Command for RunCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let input = ctx.open_input(self.file.as_deref())?;
        let mut session = Session::new(ctx.config.clone())?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let summary = session.run(input, &mut out, ctx.cli.format)?;

        debug!(elapsed = ?ctx.start.elapsed(), ?summary, "run");
        Ok(ExitCode::Success)
    }
}
