//! Structured commands accepted by a session

use crate::graph::{Jumps, Location};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `A - B`
    AddLink { from: Location, to: Location },
    /// `show ...`
    ListLinks,
    /// `cities from A in N jumps`
    Neighborhood { origin: Location, max_jumps: Jumps },
    /// `can I teleport from A to B`
    CanReach { from: Location, to: Location },
    /// `loop possible from A`
    OnCycle { location: Location },
    /// `quit`
    Quit,
}

impl Command {
    /// Stable identifier used in structured output and logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddLink { .. } => "add_link",
            Command::ListLinks => "list_links",
            Command::Neighborhood { .. } => "neighborhood",
            Command::CanReach { .. } => "can_reach",
            Command::OnCycle { .. } => "on_cycle",
            Command::Quit => "quit",
        }
    }

    /// True for commands that answer a question about the network
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Command::Neighborhood { .. } | Command::CanReach { .. } | Command::OnCycle { .. }
        )
    }
}
