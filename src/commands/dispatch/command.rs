//! Command trait and context for dispatching commands

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{check::CheckCommand, demo::DemoCommand, run::RunCommand};
use teleport_core::config::SessionConfig;
use teleport_core::error::{ExitCode, Result, TeleportError};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: SessionConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve the session config, then apply command-line overrides
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let mut config = SessionConfig::resolve(cli.config.as_deref())?;
        if cli.strict {
            config.strict = true;
        }
        if cli.no_echo {
            config.echo_queries = false;
        }
        if cli.sorted {
            config.sorted_output = true;
        }

        Ok(Self { cli, config, start })
    }

    /// Open `file` for reading, or stdin when absent
    pub fn open_input(&self, file: Option<&Path>) -> Result<Box<dyn BufRead>> {
        match file {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    TeleportError::UsageError(format!("cannot open {}: {}", path.display(), e))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        match self {
            Commands::Run { file } => RunCommand { file: file.clone() }.execute(ctx),
            Commands::Demo => DemoCommand.execute(ctx),
            Commands::Check { file } => CheckCommand { file: file.clone() }.execute(ctx),
        }
    }
}
