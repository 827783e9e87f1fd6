//! How hazard sources are treated when preparing a grid for search.

use std::fmt;
use std::str::FromStr;

/// Treatment of hazard sources when deriving a search grid.
///
/// These are three distinct grids, not three behaviours of one search:
/// see [`Grid::for_mode`](crate::Grid::for_mode).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HazardMode {
    /// Sources spread one cell per step; searches must outrun them.
    #[default]
    Spreading,
    /// Sources are static obstacles.
    Walls,
    /// Sources are ordinary floor.
    Ignored,
}

impl HazardMode {
    pub const ALL: [HazardMode; 3] = [HazardMode::Spreading, HazardMode::Walls, HazardMode::Ignored];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Spreading => "spreading",
            Self::Walls => "walls",
            Self::Ignored => "ignored",
        }
    }
}

impl fmt::Display for HazardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a hazard mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown hazard mode \u{201c}{}\u{201d} (expected spreading, walls or ignored)",
            self.0
        )
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for HazardMode {
    type Err = ParseModeError;

    /// Accepts the canonical names plus `dynamic`, `static` and `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spreading" | "dynamic" => Ok(Self::Spreading),
            "walls" | "static" => Ok(Self::Walls),
            "ignored" | "none" => Ok(Self::Ignored),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
