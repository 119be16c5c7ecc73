//! `teleport check`: parse a script without running it

use std::path::PathBuf;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{Command, CommandContext};
use teleport_core::error::{ExitCode, Result};
use teleport_core::format::quote;
use teleport_core::session::{check, CheckReport};

pub struct CheckCommand {
    pub file: Option<PathBuf>,
}

impl Command for CheckCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let input = ctx.open_input(self.file.as_deref())?;
        let report = check(input, &ctx.config)?;

        print_report(&report, ctx.cli.format);

        if report.is_clean() {
            Ok(ExitCode::Success)
        } else {
            Ok(ExitCode::Data)
        }
    }
}

fn print_report(report: &CheckReport, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            for rejection in &report.rejected {
                println!("line {}: {}", rejection.line_number, rejection.error);
            }
            println!(
                "{} valid, {} rejected",
                report.valid,
                report.rejected.len()
            );
        }
        OutputFormat::Json => {
            let rejected: Vec<_> = report
                .rejected
                .iter()
                .map(|r| {
                    json!({
                        "line": r.line_number,
                        "type": r.error.error_type(),
                        "message": r.error.to_string(),
                    })
                })
                .collect();
            println!(
                "{}",
                json!({ "valid": report.valid, "rejected": rejected })
            );
        }
        OutputFormat::Records => {
            println!(
                "S valid={} rejected={}",
                report.valid,
                report.rejected.len()
            );
            for r in &report.rejected {
                println!(
                    "X line={} type={} message={}",
                    r.line_number,
                    r.error.error_type(),
                    quote(&r.error.to_string())
                );
            }
        }
    }
}
