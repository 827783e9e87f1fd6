//! Comparison runs behind the `emberpath` command.
//!
//! A run takes one marked-up grid and one hazard mode, solves it once per
//! heuristic with a shared [`PathFinder`], and times each search call.
//! The result prints as a small table.

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use emberpath_core::{CellKind, Grid, HazardMode, Point};
use emberpath_maze::ScenarioConfig;
use emberpath_paths::{HazardMap, Heuristic, PathFinder, SearchError, SearchResult, propagate};

/// Display name of a heuristic in reports. A* without an estimate is
/// Dijkstra's algorithm.
pub fn label(heuristic: Heuristic) -> &'static str {
    match heuristic {
        Heuristic::Zero => "Dijkstra",
        Heuristic::Manhattan => "A* manhattan",
        Heuristic::Euclidean => "A* euclidean",
    }
}

// ---------------------------------------------------------------------------
// Trials
// ---------------------------------------------------------------------------

/// One search on a scenario.
#[derive(Debug, Clone)]
pub struct Trial {
    pub heuristic: Heuristic,
    pub result: SearchResult,
    /// Wall time of the search call alone.
    pub elapsed: Duration,
}

impl Trial {
    pub fn label(&self) -> &'static str {
        label(self.heuristic)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Every trial run on one scenario under one hazard mode.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub mode: HazardMode,
    pub start: Point,
    pub exit: Point,
    /// Arrival times, present only for [`HazardMode::Spreading`].
    pub hazard: Option<HazardMap>,
    pub trials: Vec<Trial>,
}

impl Comparison {
    /// Fastest successful trial, if any trial found a route.
    pub fn fastest(&self) -> Option<&Trial> {
        self.trials
            .iter()
            .filter(|t| t.result.found())
            .min_by_key(|t| t.elapsed)
    }

    /// Trial that expanded the fewest nodes.
    pub fn leanest(&self) -> Option<&Trial> {
        self.trials.iter().min_by_key(|t| t.result.expanded)
    }
}

/// Solve `grid` under `mode` once per heuristic in `heuristics`.
///
/// The hazard map is computed once, outside the timed calls.
pub fn compare(
    grid: &Grid,
    mode: HazardMode,
    heuristics: &[Heuristic],
) -> Result<Comparison, SearchError> {
    let (start, exit) = grid.endpoints()?;
    let prepared = grid.for_mode(mode);
    let hazard = (mode == HazardMode::Spreading).then(|| propagate(&prepared));

    let mut finder = PathFinder::new(prepared.bounds());
    let mut trials = Vec::with_capacity(heuristics.len());
    for &heuristic in heuristics {
        let began = Instant::now();
        let result = match &hazard {
            Some(map) => finder.search_with_hazard(&prepared, start, exit, map, heuristic)?,
            None => finder.search_plain(&prepared, start, exit, heuristic)?,
        };
        let elapsed = began.elapsed();
        log::debug!(
            "compare: {mode} {heuristic}: {} steps, {} expanded in {elapsed:?}",
            result.steps(),
            result.expanded
        );
        trials.push(Trial {
            heuristic,
            result,
            elapsed,
        });
    }

    Ok(Comparison {
        mode,
        start,
        exit,
        hazard,
        trials,
    })
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode: {}  start: {}  exit: {}", self.mode, self.start, self.exit)?;
        if let Some(map) = &self.hazard {
            write!(f, "  burning cells: {}", map.reached())?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:<14}{:>7}{:>7}{:>10}{:>11}",
            "algorithm", "found", "steps", "expanded", "time (ms)"
        )?;
        for t in &self.trials {
            let found = if t.result.found() { "yes" } else { "no" };
            writeln!(
                f,
                "{:<14}{:>7}{:>7}{:>10}{:>11.3}",
                t.label(),
                found,
                t.result.steps(),
                t.result.expanded,
                t.elapsed_ms()
            )?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Text output and input files
// ---------------------------------------------------------------------------

/// Render `grid` in its text format with `*` over every path cell other
/// than the start and the exit.
pub fn overlay(grid: &Grid, path: &[Point]) -> String {
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let kind = grid.at(p).unwrap_or_default();
            let on_path = path.contains(&p) && !matches!(kind, CellKind::Start | CellKind::Exit);
            out.push(if on_path { '*' } else { kind.to_char() });
        }
        out.push('\n');
    }
    out
}

/// Read a hand-authored grid from a text file.
pub fn load_grid(path: &Path) -> Result<Grid, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(Grid::parse(&text)?)
}

/// Parse and validate a JSON scenario configuration. Missing fields take
/// their default values.
pub fn parse_config(json: &str) -> Result<ScenarioConfig, Box<dyn Error>> {
    let config: ScenarioConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Read a JSON scenario configuration from a file.
pub fn load_config(path: &Path) -> Result<ScenarioConfig, Box<dyn Error>> {
    parse_config(&std::fs::read_to_string(path)?)
}
