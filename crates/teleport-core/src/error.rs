//! Error types and exit codes for teleport
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Input error (a script line that could not be turned into a command)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input error - unparseable or rejected command line (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during teleport operations
#[derive(Error, Debug)]
pub enum TeleportError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Input errors (exit code 3)
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unable to parse line: {line}")]
    Unparseable { line: String },

    #[error("a location cannot be linked to itself: {name}")]
    SelfLink { name: String },

    #[error("number of jumps must be at least 1, got {value}")]
    InvalidJumps { value: u32 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid command pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid config {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl TeleportError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TeleportError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a line that matches no command shape
    pub fn unparseable(line: impl Into<String>) -> Self {
        TeleportError::Unparseable { line: line.into() }
    }

    /// True for errors raised while turning a single input line into a
    /// command. A session reports these and keeps reading.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TeleportError::Unparseable { .. }
                | TeleportError::SelfLink { .. }
                | TeleportError::InvalidJumps { .. }
                | TeleportError::InvalidValue { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TeleportError::UnknownFormat(_) | TeleportError::UsageError(_) => ExitCode::Usage,

            TeleportError::InvalidValue { .. }
            | TeleportError::Unparseable { .. }
            | TeleportError::SelfLink { .. }
            | TeleportError::InvalidJumps { .. } => ExitCode::Data,

            TeleportError::Io(_)
            | TeleportError::Toml(_)
            | TeleportError::Pattern(_)
            | TeleportError::Config { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TeleportError::UnknownFormat(_) => "unknown_format",
            TeleportError::UsageError(_) => "usage_error",
            TeleportError::InvalidValue { .. } => "invalid_value",
            TeleportError::Unparseable { .. } => "unparseable",
            TeleportError::SelfLink { .. } => "self_link",
            TeleportError::InvalidJumps { .. } => "invalid_jumps",
            TeleportError::Io(_) => "io_error",
            TeleportError::Toml(_) => "toml_error",
            TeleportError::Pattern(_) => "pattern_error",
            TeleportError::Config { .. } => "config_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for teleport operations
pub type Result<T> = std::result::Result<T, TeleportError>;
