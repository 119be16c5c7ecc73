//! CLI argument parsing for teleport
//!
//! Global flags: --format, --config, --quiet, --verbose, --strict, --no-echo,
//! --sorted

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use teleport_core::format::OutputFormat;

/// Teleport - answer questions about a network of teleporter links
#[derive(Parser, Debug)]
#[command(name = "teleport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Session configuration file (TOML)
    #[arg(long, global = true, env = "TELEPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress error messages on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Stop at the first line that cannot be parsed
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print query answers without echoing the query
    #[arg(long, global = true)]
    pub no_echo: bool,

    /// Sort locations and links in responses
    #[arg(long, global = true)]
    pub sorted: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run commands from a file, or from stdin (default)
    Run {
        /// Script to read instead of stdin
        file: Option<PathBuf>,
    },

    /// Run the built-in example network and questions
    Demo,

    /// Parse a script without running it and report rejected lines
    Check {
        /// Script to read instead of stdin
        file: Option<PathBuf>,
    },
}

/// Parse output format from string
fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
