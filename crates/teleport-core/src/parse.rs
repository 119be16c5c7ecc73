//! Command grammar
//!
//! Turns one line of input into a [`Command`]. Lines are trimmed and
//! dispatched on their first word:
//!
//! - `cities from <name> in <n> jumps`
//! - `can I teleport from <name> to <name>`
//! - `loop possible from <name>`
//! - `show ...`
//! - `quit`
//! - anything else is read as a link, `<name> - <name>`
//!
//! Names are normalized per [`SessionConfig`] and interned, so every
//! spelling that normalizes to the same text yields the same [`Location`].

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::bail_invalid;
use crate::command::Command;
use crate::config::{NameCase, SessionConfig};
use crate::error::{Result, TeleportError};
use crate::graph::{Jumps, Location};

const NEIGHBORHOOD_PATTERN: &str = r"^cities from ([\sa-zA-Z]+?) in (\d+) jumps?$";
const CAN_REACH_PATTERN: &str = r"^can I teleport from ([\sa-zA-Z]+?) to ([\sa-zA-Z]+)$";
const ON_CYCLE_PATTERN: &str = r"^loop possible from ([\sa-zA-Z]+)$";

/// Parser for session input lines
#[derive(Debug)]
pub struct CommandParser {
    neighborhood: Regex,
    can_reach: Regex,
    on_cycle: Regex,
    collapse_whitespace: bool,
    case: NameCase,
    locations: HashMap<String, Location>,
}

impl CommandParser {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        Ok(Self {
            neighborhood: Regex::new(NEIGHBORHOOD_PATTERN)?,
            can_reach: Regex::new(CAN_REACH_PATTERN)?,
            on_cycle: Regex::new(ON_CYCLE_PATTERN)?,
            collapse_whitespace: config.collapse_whitespace,
            case: config.case,
            locations: HashMap::new(),
        })
    }

    /// Parse a line into a command.
    ///
    /// Lines that match no command shape are `Unparseable`; a link from a
    /// location to itself is `SelfLink`; a jump count of zero is
    /// `InvalidJumps`. Unparseable errors carry the line as given, surrounding
    /// whitespace included.
    pub fn parse(&mut self, line: &str) -> Result<Command> {
        let trimmed = line.trim();
        let first = trimmed.split_whitespace().next().unwrap_or("");

        let parsed = match first {
            "cities" => self.parse_neighborhood(trimmed),
            "can" => self.parse_can_reach(trimmed),
            "loop" => self.parse_on_cycle(trimmed),
            "show" => Ok(Command::ListLinks),
            "quit" => Ok(Command::Quit),
            _ => self.parse_add_link(trimmed),
        }
        .map_err(|e| match e {
            TeleportError::Unparseable { .. } => TeleportError::unparseable(line),
            other => other,
        });

        if let Err(e) = &parsed {
            debug!(line = trimmed, error = %e, "parse_failed");
        }
        parsed
    }

    /// Number of distinct names seen by this parser
    pub fn interned(&self) -> usize {
        self.locations.len()
    }

    fn parse_neighborhood(&mut self, line: &str) -> Result<Command> {
        let Some(caps) = self.neighborhood.captures(line) else {
            return Err(TeleportError::unparseable(line));
        };
        let (name, count) = (caps[1].to_string(), caps[2].to_string());

        let Ok(count) = count.parse::<u32>() else {
            bail_invalid!("number of jumps", count);
        };
        let max_jumps = Jumps::new(count)?;
        let origin = self.location(&name, line)?;

        Ok(Command::Neighborhood { origin, max_jumps })
    }

    fn parse_can_reach(&mut self, line: &str) -> Result<Command> {
        let Some(caps) = self.can_reach.captures(line) else {
            return Err(TeleportError::unparseable(line));
        };
        let (from, to) = (caps[1].to_string(), caps[2].to_string());

        Ok(Command::CanReach {
            from: self.location(&from, line)?,
            to: self.location(&to, line)?,
        })
    }

    fn parse_on_cycle(&mut self, line: &str) -> Result<Command> {
        let Some(caps) = self.on_cycle.captures(line) else {
            return Err(TeleportError::unparseable(line));
        };
        let name = caps[1].to_string();

        Ok(Command::OnCycle {
            location: self.location(&name, line)?,
        })
    }

    fn parse_add_link(&mut self, line: &str) -> Result<Command> {
        let Some((from, to)) = line.split_once('-') else {
            return Err(TeleportError::unparseable(line));
        };
        if from.is_empty() {
            return Err(TeleportError::unparseable(line));
        }

        let from = self.location(from, line)?;
        let to = self.location(to, line)?;
        if from == to {
            return Err(TeleportError::SelfLink {
                name: from.name().to_string(),
            });
        }

        Ok(Command::AddLink { from, to })
    }

    /// Normalize `raw` and return its canonical location
    fn location(&mut self, raw: &str, line: &str) -> Result<Location> {
        let name = self.normalize(raw);
        if name.is_empty() {
            return Err(TeleportError::unparseable(line));
        }

        let location = self
            .locations
            .entry(name)
            .or_insert_with_key(|name| Location::new(name.as_str()));
        Ok(location.clone())
    }

    fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let name = if self.collapse_whitespace {
            trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            trimmed.to_string()
        };

        match self.case {
            NameCase::Preserve => name,
            NameCase::Lower => name.to_lowercase(),
        }
    }
}
