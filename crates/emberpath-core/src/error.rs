use std::fmt;

use crate::geom::Point;

/// Errors raised when a grid is malformed or lacks the markers a caller needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The text contained no rows, or a dimension was zero.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell list does not hold `width × height` entries.
    CellCount { expected: usize, found: usize },
    /// A character outside the five grid symbols.
    InvalidSymbol { ch: char, pos: Point },
    /// No start cell (`D`).
    MissingStart,
    /// No exit cell (`S`).
    MissingExit,
    /// More than one start cell.
    DuplicateStart { first: Point, second: Point },
    /// More than one exit cell.
    DuplicateExit { first: Point, second: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::CellCount { expected, found } => {
                write!(f, "grid: {found} cells given, expected {expected}")
            }
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "grid: invalid symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "grid: no start cell"),
            Self::MissingExit => write!(f, "grid: no exit cell"),
            Self::DuplicateStart { first, second } => {
                write!(f, "grid: second start cell at {second} (first at {first})")
            }
            Self::DuplicateExit { first, second } => {
                write!(f, "grid: second exit cell at {second} (first at {first})")
            }
        }
    }
}

impl std::error::Error for GridError {}
