//! Session loop
//!
//! A session owns one network for its whole lifetime. Each input line is
//! parsed, applied to the network and rendered; reading stops at end of
//! input or at `quit`.

use std::io::{BufRead, Write};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info_span};

use crate::command::Command;
use crate::config::SessionConfig;
use crate::error::{Result, TeleportError};
use crate::format::OutputFormat;
use crate::graph::Network;
use crate::parse::CommandParser;
use crate::render::{Outcome, Renderer};
use crate::trace_time;

/// The example network and questions the tool was first written against
pub const DEMO_SCRIPT: &[&str] = &[
    "Fortuna - Hemingway",
    "Fortuna - Atlantis",
    "Hemingway - Chesterfield",
    "Chesterfield - Springton",
    "Los Amigos - Paristown",
    "Paristown - Oaktown",
    "Los Amigos - Oaktown",
    "Summerton - Springton",
    "Summerton - Hemingway",
    "cities from Summerton in 1 jumps",
    "cities from Summerton in 2 jumps",
    "can I teleport from Springton to Atlantis",
    "can I teleport from Oaktown to Atlantis",
    "loop possible from Oaktown",
    "loop possible from Fortuna",
];

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Lines read, including blank and rejected ones
    pub lines: usize,
    /// Commands applied to the network
    pub executed: usize,
    /// Lines that could not be turned into a command
    pub rejected: usize,
    /// Whether reading stopped at `quit`
    pub quit: bool,
}

/// A rejected line from a dry run
#[derive(Debug)]
pub struct Rejection {
    /// 1-based line number
    pub line_number: usize,
    pub error: TeleportError,
}

/// Result of parsing a script without running it
#[derive(Debug, Default)]
pub struct CheckReport {
    pub valid: usize,
    pub rejected: Vec<Rejection>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

pub struct Session {
    network: Network,
    parser: CommandParser,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        Ok(Self {
            network: Network::new(),
            parser: CommandParser::new(&config)?,
            config,
        })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Apply a command to the network.
    ///
    /// Returns `None` for `quit`.
    pub fn execute(&mut self, command: Command) -> Option<Outcome> {
        let outcome = match command {
            Command::AddLink { from, to } => {
                self.network.add_link(from.clone(), to.clone());
                Outcome::Linked { from, to }
            }
            Command::ListLinks => {
                let mut links = if self.config.unique_links {
                    self.network.unique_links()
                } else {
                    self.network.links()
                };
                if self.config.sorted_output {
                    links.sort();
                }
                Outcome::Links(links)
            }
            Command::Neighborhood { origin, max_jumps } => {
                let mut locations: Vec<_> = self
                    .network
                    .neighborhood(&origin, max_jumps)
                    .into_iter()
                    .collect();
                if self.config.sorted_output {
                    locations.sort();
                }
                Outcome::Neighborhood {
                    origin,
                    max_jumps,
                    locations,
                }
            }
            Command::CanReach { from, to } => {
                let reachable = self.network.can_reach(&from, &to);
                Outcome::CanReach {
                    from,
                    to,
                    reachable,
                }
            }
            Command::OnCycle { location } => {
                let cyclic = self.network.on_cycle(&location);
                Outcome::OnCycle { location, cyclic }
            }
            Command::Quit => return None,
        };
        Some(outcome)
    }

    /// Parse one line. Blank lines yield `Ok(None)`.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Command>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        self.parser.parse(line).map(Some)
    }

    /// Run every line of `reader` through the session, writing rendered
    /// responses to `writer`.
    ///
    /// Rejected lines are reported in the output and skipped, unless the
    /// session is strict, in which case the first one ends the run.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        writer: &mut W,
        format: OutputFormat,
    ) -> Result<SessionSummary> {
        let start = Instant::now();
        let _span = info_span!("session", %format).entered();
        let renderer = Renderer::new(format, self.config.echo_queries);
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        while let Some(line) = read_line_lossy(&mut reader, &mut buf)? {
            summary.lines += 1;

            let command = match self.handle_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) if e.is_input_error() => {
                    summary.rejected += 1;
                    if self.config.strict {
                        return Err(e);
                    }
                    writeln!(writer, "{}", renderer.render_error(&e))?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            debug!(command = command.name(), query = command.is_query(), "execute");
            let Some(outcome) = self.execute(command) else {
                summary.quit = true;
                break;
            };
            summary.executed += 1;

            for rendered in renderer.render(&line, &outcome) {
                writeln!(writer, "{rendered}")?;
            }
        }

        writer.flush()?;
        trace_time!(start, "session_run", lines = summary.lines);
        debug!(
            lines = summary.lines,
            executed = summary.executed,
            rejected = summary.rejected,
            quit = summary.quit,
            locations = self.network.len(),
            "session_summary"
        );
        Ok(summary)
    }
}

/// Parse every line of `reader` without executing anything.
///
/// Parsing stops at `quit`, the same place a real run would.
pub fn check<R: BufRead>(mut reader: R, config: &SessionConfig) -> Result<CheckReport> {
    let mut parser = CommandParser::new(config)?;
    let mut report = CheckReport::default();
    let mut buf = Vec::new();
    let mut index = 0;

    while let Some(line) = read_line_lossy(&mut reader, &mut buf)? {
        index += 1;
        if line.trim().is_empty() {
            continue;
        }

        match parser.parse(&line) {
            Ok(Command::Quit) => break,
            Ok(_) => report.valid += 1,
            Err(e) if e.is_input_error() => report.rejected.push(Rejection {
                line_number: index,
                error: e,
            }),
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Read the next line without its terminator, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD so one bad line
/// cannot end the session.
fn read_line_lossy<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, config: SessionConfig, format: OutputFormat) -> (String, SessionSummary) {
        let mut session = Session::new(config).unwrap();
        let mut out = Vec::new();
        let summary = session
            .run(Cursor::new(script.to_string()), &mut out, format)
            .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_quit_stops_reading() {
        let (out, summary) = run(
            "A - B\nquit\ncan I teleport from A to B\n",
            SessionConfig::default(),
            OutputFormat::Human,
        );
        assert!(out.is_empty());
        assert!(summary.quit);
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.executed, 1);
    }

    #[test]
    fn test_unparseable_line_is_reported_and_skipped() {
        let (out, summary) = run(
            "hello there\nA - B\ncan I teleport from A to B\n",
            SessionConfig::default(),
            OutputFormat::Human,
        );
        assert_eq!(
            out,
            "unable to parse line: hello there\ncan I teleport from A to B: yes\n"
        );
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.executed, 2);
        assert!(!summary.quit);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let (out, summary) = run("\n   \nA - B\n", SessionConfig::default(), OutputFormat::Human);
        assert!(out.is_empty());
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.rejected, 0);
    }

    #[test]
    fn test_strict_session_fails_on_bad_line() {
        let config = SessionConfig {
            strict: true,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config).unwrap();
        let mut out = Vec::new();
        let err = session
            .run(Cursor::new("A - A\n"), &mut out, OutputFormat::Human)
            .unwrap_err();
        assert!(matches!(err, TeleportError::SelfLink { .. }));
    }

    #[test]
    fn test_sorted_unique_links() {
        let config = SessionConfig {
            unique_links: true,
            sorted_output: true,
            ..SessionConfig::default()
        };
        let (out, _) = run("B - A\nC - B\nshow\n", config, OutputFormat::Human);
        assert_eq!(out, "A - B\nB - C\n");
    }

    #[test]
    fn test_demo_script_answers() {
        let config = SessionConfig {
            sorted_output: true,
            ..SessionConfig::default()
        };
        let (out, summary) = run(&DEMO_SCRIPT.join("\n"), config, OutputFormat::Human);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "cities from Summerton in 1 jumps: Hemingway, Springton",
                "cities from Summerton in 2 jumps: Chesterfield, Fortuna, Hemingway, Springton",
                "can I teleport from Springton to Atlantis: yes",
                "can I teleport from Oaktown to Atlantis: no",
                "loop possible from Oaktown: yes",
                "loop possible from Fortuna: no",
            ]
        );
        assert_eq!(summary.executed, DEMO_SCRIPT.len());
    }

    #[test]
    fn test_json_session() {
        let (out, _) = run(
            "A - B\nloop possible from A\nbogus\n",
            SessionConfig::default(),
            OutputFormat::Json,
        );
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["command"], "on_cycle");
        assert_eq!(lines[0]["result"], false);
        assert_eq!(lines[1]["error"]["type"], "unparseable");
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        let mut out = Vec::new();
        let script: &[u8] = b"A - B\n\xff\xfe - C\ncan I teleport from A to B\n";
        let summary = session
            .run(Cursor::new(script), &mut out, OutputFormat::Human)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "can I teleport from A to B: yes\n"
        );
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.executed, 3);
        assert!(session.network().contains(&"\u{FFFD}\u{FFFD}".into()));
    }

    #[test]
    fn test_crlf_line_endings() {
        let (out, summary) = run(
            "A - B\r\nB - C\r\ncan I teleport from A to C\r\n",
            SessionConfig::default(),
            OutputFormat::Human,
        );
        assert_eq!(out, "can I teleport from A to C: yes\n");
        assert_eq!(summary.rejected, 0);
    }

    #[test]
    fn test_unparseable_diagnostic_keeps_raw_line() {
        let (out, _) = run("  hello there \n", SessionConfig::default(), OutputFormat::Human);
        assert_eq!(out, "unable to parse line:   hello there \n");
    }

    #[test]
    fn test_check_survives_invalid_utf8() {
        let script: &[u8] = b"A - B\n\xff\nshow\n";
        let report = check(Cursor::new(script), &SessionConfig::default()).unwrap();
        assert_eq!(report.valid, 2);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line_number, 2);
    }

    #[test]
    fn test_check_reports_line_numbers() {
        let script = "A - B\n\nA - A\ncities from A in 0 jumps\nshow\nquit\nnonsense\n";
        let report = check(Cursor::new(script), &SessionConfig::default()).unwrap();
        assert_eq!(report.valid, 2);
        let numbers: Vec<usize> = report.rejected.iter().map(|r| r.line_number).collect();
        assert_eq!(numbers, vec![3, 4]);
        assert!(!report.is_clean());
    }
}
