//! Hazard propagation and time-aware route search on grids.
//!
//! - **HazardClock**: [`propagate`] runs a multi-source breadth-first
//!   expansion from every hazard source and returns a [`HazardMap`] of
//!   arrival times.
//! - **PathFinder**: [`search_plain`] is A* over the wall-only graph;
//!   [`search_with_hazard`] is the same search restricted to cells that are
//!   still safe when they are entered. Both take a [`Heuristic`] and return a
//!   [`SearchResult`] carrying the path and the number of expanded nodes.
//! - Connectivity queries ([`PathFinder::reachable`],
//!   [`PathFinder::component_count`]).
//!
//! The free functions allocate a fresh [`PathFinder`] per call. Callers
//! running many searches can keep one `PathFinder` and reuse its caches.

mod astar;
mod distance;
mod error;
mod finder;
mod hazard;
mod heuristic;
mod reachable;
mod traits;

pub use astar::{search_plain, search_with_hazard, solve};
pub use distance::{euclidean, manhattan};
pub use error::SearchError;
pub use finder::{PathFinder, SearchResult};
pub use hazard::{HazardMap, NEVER, propagate};
pub use heuristic::{Heuristic, HeuristicError};
pub use traits::Pather;
