//! Randomized maze generation for exercising the searches.
//!
//! [`MazeGen`] carves perfect mazes with a recursive backtracker, optionally
//! adds loops, and can mark a maze up as a complete scenario with start,
//! exit and hazard sources. All randomness comes from the `Rng` the
//! generator is built with.

pub mod config;
pub mod maze;

pub use config::{MazeConfig, MazeError, MIN_SIZE, ScenarioConfig};
pub use maze::MazeGen;
