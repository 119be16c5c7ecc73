//! `teleport demo`: the example network and its questions

use std::io::{self, Cursor};

use crate::commands::dispatch::{Command, CommandContext};
use teleport_core::error::{ExitCode, Result};
use teleport_core::session::{Session, DEMO_SCRIPT};

pub struct DemoCommand;

impl Command for DemoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let script = DEMO_SCRIPT.join("\n");
        let mut session = Session::new(ctx.config.clone())?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        session.run(Cursor::new(script), &mut out, ctx.cli.format)?;

        Ok(ExitCode::Success)
    }
}
