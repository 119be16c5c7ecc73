//! Session configuration for teleport
//!
//! Read from `--config <path>`, or from `config.toml` in the teleport config
//! directory (`$TELEPORT_CONFIG_DIR`, else `<config dir>/teleport`). A
//! missing default file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_usage;
use crate::error::{Result, TeleportError};

const CONFIG_DIR: &str = "teleport";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TELEPORT_CONFIG_DIR";

/// How location names are case-folded by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCase {
    /// Keep names as typed
    #[default]
    Preserve,
    /// Lowercase every name
    Lower,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Prefix query responses with the query line (`<line>: <result>`)
    pub echo_queries: bool,

    /// Collapse runs of whitespace inside names to a single space
    pub collapse_whitespace: bool,

    /// Case folding applied to names
    pub case: NameCase,

    /// List each undirected link once instead of once per direction
    pub unique_links: bool,

    /// Abort on the first line that cannot be parsed
    pub strict: bool,

    /// Sort locations and links in responses
    pub sorted_output: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            echo_queries: true,
            collapse_whitespace: true,
            case: NameCase::Preserve,
            unique_links: false,
            strict: false,
            sorted_output: false,
        }
    }
}

impl SessionConfig {
    /// Load from an explicit path, or from the default location if present.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail_usage!(format!("config file not found: {}", path.display()));
            }
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TeleportError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), ?config, "load_config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn default_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}
