//! Generate or load hazard scenarios and compare the three searches on them.
//!
//! ```bash
//! cargo run -- --width 31 --height 21 --hazards 2 --seed 7 --show
//! cargo run -- --grid level.txt --mode walls
//! RUST_LOG=debug cargo run -- --count 5 --heuristic manhattan
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use emberpath_core::{Grid, HazardMode};
use emberpath_demos::{compare, load_config, load_grid, overlay};
use emberpath_maze::{MazeGen, ScenarioConfig};
use emberpath_paths::Heuristic;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(name = "emberpath")]
#[command(about = "Compare Dijkstra and A* routes through mazes with a spreading hazard")]
struct Args {
    /// Maze width in cells (odd sizes give perfect mazes)
    #[arg(long)]
    width: Option<i32>,

    /// Maze height in cells
    #[arg(long)]
    height: Option<i32>,

    /// Share of loop candidates to open, in [0, 1]
    #[arg(long)]
    loops: Option<f64>,

    /// Random seed; a fresh one is drawn and printed when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Exact number of hazard sources to place
    #[arg(long)]
    hazards: Option<usize>,

    /// Hazard mode: spreading, walls or ignored (default: all three)
    #[arg(long)]
    mode: Option<HazardMode>,

    /// Heuristic: zero, manhattan or euclidean (default: all three)
    #[arg(long)]
    heuristic: Option<Heuristic>,

    /// Load a hand-authored grid instead of generating one
    #[arg(long, conflicts_with = "config")]
    grid: Option<PathBuf>,

    /// JSON scenario configuration; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of random scenarios to generate
    #[arg(long, default_value = "1")]
    count: usize,

    /// Print each grid with the best route drawn on it
    #[arg(long)]
    show: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let modes = args.mode.map_or_else(|| HazardMode::ALL.to_vec(), |m| vec![m]);
    let heuristics = args
        .heuristic
        .map_or_else(|| Heuristic::ALL.to_vec(), |h| vec![h]);

    if let Some(path) = &args.grid {
        let grid = load_grid(path)?;
        log::info!(
            "loaded {}x{} grid from {}",
            grid.width(),
            grid.height(),
            path.display()
        );
        return report(&grid, &modes, &heuristics, args.show);
    }

    let config = scenario_config(&args)?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    println!("seed: {seed}");
    let mut maze_gen = MazeGen::new(StdRng::seed_from_u64(seed));

    for i in 1..=args.count {
        let grid = maze_gen.scenario(&config)?;
        println!(
            "\nscenario {i}/{}: {}x{}, {} hazard source(s)",
            args.count,
            grid.width(),
            grid.height(),
            grid.hazard_sources().len()
        );
        report(&grid, &modes, &heuristics, args.show)?;
    }
    Ok(())
}

/// Settings from `--config` (or defaults), overridden by individual flags.
fn scenario_config(args: &Args) -> Result<ScenarioConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ScenarioConfig::default(),
    };
    if let Some(w) = args.width {
        config.maze.width = w;
    }
    if let Some(h) = args.height {
        config.maze.height = h;
    }
    if let Some(f) = args.loops {
        config.maze.loop_fraction = f;
    }
    if let Some(n) = args.hazards {
        config.min_hazards = n;
        config.max_hazards = n;
    }
    config.validate()?;
    Ok(config)
}

fn report(
    grid: &Grid,
    modes: &[HazardMode],
    heuristics: &[Heuristic],
    show: bool,
) -> Result<(), Box<dyn Error>> {
    for &mode in modes {
        let comparison = compare(grid, mode, heuristics)?;
        println!();
        print!("{comparison}");
        if show {
            let path = comparison
                .fastest()
                .map(|t| t.result.path.as_slice())
                .unwrap_or_default();
            print!("{}", overlay(grid, path));
        }
    }
    Ok(())
}
