//! Engine state management.
//!
//! Holds the current army set and engine options, and runs the route search
//! for the `go` command. Options are stored as the host sends them and
//! parsed on use, falling back to defaults for missing or invalid values.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Instant;

use thiserror::Error;

use crate::army::{parse_armies, Army, ParseError};
use crate::resolve::{ResolveConfig, MAX_STRENGTH_LEVEL};
use crate::search::{optimal_route_parallel, trace_route, OptimalRoute, RouteError, RouteTrace};

/// Default worker thread count for the route search.
const DEFAULT_THREADS: usize = 4;

/// Default cap on the army count; 11! is about 40 million orderings.
const DEFAULT_MAX_ARMIES: usize = 11;

/// Demo army set, handy for smoke-testing a host integration.
pub const DEMO_ARMIES: &str = "friendly_axe4,friendly_axe41,enemy_sword11,enemy_axe31,\
    enemy_bow12,enemy_bow12,enemy_any21,enemy_any21,enemy_any21,enemy_any21";

/// Errors reported back to the host as `error <message>` lines.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("{count} armies exceeds the limit of {max} (search is factorial in the army count)")]
    TooManyArmies { count: usize, max: usize },
}

/// How `go` and `score` results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Holds the mutable state of the engine between commands.
#[derive(Debug, Default)]
pub struct Engine {
    pub armies: Vec<Army>,
    pub options: HashMap<String, String>,
}

impl Engine {
    /// Creates a new engine with no armies and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current army set. On a parse error the set is unchanged.
    pub fn set_armies(&mut self, tokens: &str) -> Result<(), EngineError> {
        self.armies = parse_armies(tokens)?;
        Ok(())
    }

    /// Appends to the current army set. On a parse error nothing is added.
    pub fn add_armies(&mut self, tokens: &str) -> Result<(), EngineError> {
        let parsed = parse_armies(tokens)?;
        self.armies.extend(parsed);
        Ok(())
    }

    /// Empties the current army set.
    pub fn clear(&mut self) {
        self.armies.clear();
    }

    /// Loads [`DEMO_ARMIES`] as the current army set.
    pub fn load_demo(&mut self) -> Result<(), EngineError> {
        self.set_armies(DEMO_ARMIES)
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    fn option<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.options.get(name).and_then(|v| v.parse::<T>().ok())
    }

    /// Resolver settings built from the `StrengthLevel` option (default 0).
    pub fn resolve_config(&self) -> ResolveConfig {
        ResolveConfig::new(self.option("StrengthLevel").unwrap_or(0))
    }

    /// Returns the configured search thread count.
    fn threads(&self) -> usize {
        self.option("Threads").unwrap_or(DEFAULT_THREADS).max(1)
    }

    /// Returns the configured army cap.
    fn max_armies(&self) -> usize {
        self.option("MaxArmies").unwrap_or(DEFAULT_MAX_ARMIES)
    }

    /// Returns the configured output format; anything but `json` is text.
    pub fn output_format(&self) -> OutputFormat {
        match self.options.get("Output").map(|v| v.to_ascii_lowercase()) {
            Some(v) if v == "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    /// Handles the handshake: writes id, options, and `vanguardok`.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name vanguard")?;
        writeln!(out, "id author vanguard")?;
        writeln!(
            out,
            "option name StrengthLevel type spin default 0 min 0 max {}",
            MAX_STRENGTH_LEVEL
        )?;
        writeln!(
            out,
            "option name Threads type spin default {} min 1 max 64",
            DEFAULT_THREADS
        )?;
        writeln!(
            out,
            "option name MaxArmies type spin default {} min 1 max 20",
            DEFAULT_MAX_ARMIES
        )?;
        writeln!(out, "option name Output type combo default text var text var json")?;
        writeln!(out, "vanguardok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Writes an `error` line for the host.
    pub fn handle_error<W: Write>(&self, err: &EngineError, out: &mut W) -> io::Result<()> {
        tracing::warn!(error = %err, "command failed");
        writeln!(out, "error {}", err)?;
        out.flush()
    }

    /// Handles the `go` command: searches every ordering of the current
    /// armies and writes the best route with its breakdown.
    pub fn handle_go<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let started = Instant::now();
        let best = match self.search() {
            Ok(best) => best,
            Err(e) => return self.handle_error(&e, out),
        };
        let elapsed_ms = started.elapsed().as_millis();

        match self.output_format() {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &best)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                writeln!(
                    out,
                    "info orderings {} score {} time {}",
                    best.orderings,
                    best.score(),
                    elapsed_ms
                )?;
                write_steps(&best.trace, out)?;
                writeln!(
                    out,
                    "bestroute {} score {}",
                    format_route(best.route()),
                    best.score()
                )?;
            }
        }
        out.flush()
    }

    fn search(&self) -> Result<OptimalRoute, EngineError> {
        let max = self.max_armies();
        if self.armies.len() > max {
            return Err(EngineError::TooManyArmies {
                count: self.armies.len(),
                max,
            });
        }
        tracing::info!(
            armies = self.armies.len(),
            threads = self.threads(),
            "searching routes"
        );
        Ok(optimal_route_parallel(
            &self.armies,
            &self.resolve_config(),
            self.threads(),
        )?)
    }

    /// Handles the `score` command: reduces the given ordering as-is.
    pub fn handle_score<W: Write>(&self, tokens: &str, out: &mut W) -> io::Result<()> {
        let trace = match self.trace(tokens) {
            Ok(trace) => trace,
            Err(e) => return self.handle_error(&e, out),
        };

        match self.output_format() {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &trace)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                write_steps(&trace, out)?;
                writeln!(out, "score {}", trace.score)?;
            }
        }
        out.flush()
    }

    fn trace(&self, tokens: &str) -> Result<RouteTrace, EngineError> {
        let route = parse_armies(tokens)?;
        Ok(trace_route(&route, &self.resolve_config())?)
    }
}

/// Writes one `step` line per reduction step.
fn write_steps<W: Write>(trace: &RouteTrace, out: &mut W) -> io::Result<()> {
    for step in &trace.steps {
        writeln!(out, "step {}", step.describe())?;
    }
    Ok(())
}

/// Joins a route into comma-separated canonical tokens.
pub fn format_route(route: &[Army]) -> String {
    route
        .iter()
        .map(Army::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
