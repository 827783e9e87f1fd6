//! Distance estimates guiding the informed search.

use std::fmt;
use std::str::FromStr;

use emberpath_core::Point;

use crate::distance::{euclidean, manhattan};

/// Remaining-cost estimate used by A*.
///
/// All three are admissible and consistent for unit-cost 4-way movement,
/// so every choice yields a path of the same optimal length; they differ
/// only in how many nodes get expanded on the way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// Always 0: the search degrades to uniform-cost (Dijkstra) search.
    Zero,
    /// `|dx| + |dy|`.
    #[default]
    Manhattan,
    /// Straight-line distance.
    Euclidean,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::Zero, Heuristic::Manhattan, Heuristic::Euclidean];

    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Manhattan => f64::from(manhattan(from, to)),
            Self::Euclidean => euclidean(from, to),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a heuristic name is not one of `zero`, `manhattan`,
/// `euclidean`. There is no fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeuristicError {
    Unknown(String),
}

impl fmt::Display for HeuristicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(s) => write!(
                f,
                "unknown heuristic \u{201c}{s}\u{201d} (expected zero, manhattan or euclidean)"
            ),
        }
    }
}

impl std::error::Error for HeuristicError {}

impl FromStr for Heuristic {
    type Err = HeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(Self::Zero),
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(HeuristicError::Unknown(s.to_string())),
        }
    }
}
