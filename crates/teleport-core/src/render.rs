//! Rendering of command outcomes into output lines

use serde_json::json;

use crate::error::TeleportError;
use crate::format::{quote, OutputFormat};
use crate::graph::{Jumps, Link, Location};

const YES: &str = "yes";
const NO: &str = "no";

/// Result of applying one command to the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Linked {
        from: Location,
        to: Location,
    },
    Links(Vec<Link>),
    Neighborhood {
        origin: Location,
        max_jumps: Jumps,
        locations: Vec<Location>,
    },
    CanReach {
        from: Location,
        to: Location,
        reachable: bool,
    },
    OnCycle {
        location: Location,
        cyclic: bool,
    },
}

fn yes_no(answer: bool) -> &'static str {
    if answer {
        YES
    } else {
        NO
    }
}

fn join_names(locations: &[Location]) -> String {
    locations
        .iter()
        .map(Location::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Turns outcomes into the lines a session prints
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    echo_queries: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, echo_queries: bool) -> Self {
        Self {
            format,
            echo_queries,
        }
    }

    /// Lines for `outcome`; `line` is the input that produced it.
    /// Adding a link renders nothing.
    pub fn render(&self, line: &str, outcome: &Outcome) -> Vec<String> {
        match self.format {
            OutputFormat::Human => self.render_human(line, outcome),
            OutputFormat::Json => render_json(outcome).into_iter().collect(),
            OutputFormat::Records => render_records(outcome),
        }
    }

    /// Diagnostic line for an input line that was rejected
    pub fn render_error(&self, error: &TeleportError) -> String {
        match self.format {
            OutputFormat::Human => error.to_string(),
            OutputFormat::Json => error.to_json().to_string(),
            OutputFormat::Records => format!(
                "X type={} message={}",
                error.error_type(),
                quote(&error.to_string())
            ),
        }
    }

    fn render_human(&self, line: &str, outcome: &Outcome) -> Vec<String> {
        let answer = match outcome {
            Outcome::Linked { .. } => return Vec::new(),
            Outcome::Links(links) => return links.iter().map(Link::to_string).collect(),
            Outcome::Neighborhood { locations, .. } => join_names(locations),
            Outcome::CanReach { reachable, .. } => yes_no(*reachable).to_string(),
            Outcome::OnCycle { cyclic, .. } => yes_no(*cyclic).to_string(),
        };

        if self.echo_queries {
            vec![format!("{line}: {answer}")]
        } else {
            vec![answer]
        }
    }
}

fn render_json(outcome: &Outcome) -> Option<String> {
    let value = match outcome {
        Outcome::Linked { .. } => return None,
        Outcome::Links(links) => json!({
            "command": "list_links",
            "links": links,
        }),
        Outcome::Neighborhood {
            origin,
            max_jumps,
            locations,
        } => json!({
            "command": "neighborhood",
            "origin": origin,
            "max_jumps": max_jumps,
            "locations": locations,
        }),
        Outcome::CanReach {
            from,
            to,
            reachable,
        } => json!({
            "command": "can_reach",
            "from": from,
            "to": to,
            "result": reachable,
        }),
        Outcome::OnCycle { location, cyclic } => json!({
            "command": "on_cycle",
            "location": location,
            "result": cyclic,
        }),
    };
    Some(value.to_string())
}

fn render_records(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Linked { .. } => Vec::new(),
        Outcome::Links(links) => links
            .iter()
            .map(|link| {
                format!(
                    "E from={} to={}",
                    quote(link.from.name()),
                    quote(link.to.name())
                )
            })
            .collect(),
        Outcome::Neighborhood {
            origin,
            max_jumps,
            locations,
        } => {
            let mut lines = vec![format!(
                "N origin={} max_jumps={} count={}",
                quote(origin.name()),
                max_jumps,
                locations.len()
            )];
            lines.extend(
                locations
                    .iter()
                    .map(|location| format!("L name={}", quote(location.name()))),
            );
            lines
        }
        Outcome::CanReach {
            from,
            to,
            reachable,
        } => vec![format!(
            "R from={} to={} result={}",
            quote(from.name()),
            quote(to.name()),
            yes_no(*reachable)
        )],
        Outcome::OnCycle { location, cyclic } => vec![format!(
            "C location={} result={}",
            quote(location.name()),
            yes_no(*cyclic)
        )],
    }
}
