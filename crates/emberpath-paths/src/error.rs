use std::fmt;

use emberpath_core::{GridError, Point};

/// Malformed input handed to a search.
///
/// A search that simply finds no route is not an error; it returns an
/// empty [`SearchResult`](crate::SearchResult).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or exit lies outside the grid.
    OutOfBounds(Point),
    /// Start or exit is a wall.
    Blocked(Point),
    /// The hazard map was computed for a grid of another size.
    MapMismatch { grid: Point, map: Point },
    /// A hazard map whose dimensions and time count disagree.
    MapShape { width: i32, height: i32, times: usize },
    /// The grid lacks a unique start or exit.
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "search: {p} is outside the grid"),
            Self::Blocked(p) => write!(f, "search: {p} is a wall"),
            Self::MapMismatch { grid, map } => write!(
                f,
                "search: hazard map is {}x{} but grid is {}x{}",
                map.x, map.y, grid.x, grid.y
            ),
            Self::MapShape {
                width,
                height,
                times,
            } => write!(
                f,
                "search: {times} arrival times do not fill a {width}x{height} hazard map"
            ),
            Self::Grid(e) => write!(f, "search: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
