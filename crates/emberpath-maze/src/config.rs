//! Generator settings and their validation.

use std::fmt;

/// Smallest width or height that leaves one interior cell.
pub const MIN_SIZE: i32 = 3;

/// Size and loop density of a generated maze.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    /// Share of loop candidates opened after carving, in `[0, 1]`.
    /// 0 keeps the maze perfect.
    pub loop_fraction: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            loop_fraction: 0.1,
        }
    }
}

impl MazeConfig {
    pub fn new(width: i32, height: i32, loop_fraction: f64) -> Self {
        Self {
            width,
            height,
            loop_fraction,
        }
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        check_size(self.width, self.height)?;
        check_fraction(self.loop_fraction)
    }
}

/// A maze plus the markers placed on it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    pub maze: MazeConfig,
    /// Fewest hazard sources to place.
    pub min_hazards: usize,
    /// Most hazard sources to place.
    pub max_hazards: usize,
}

impl Default for ScenarioConfig {
    /// A 51 × 31 maze with 1 to 3 hazard sources.
    fn default() -> Self {
        Self {
            maze: MazeConfig::new(51, 31, 0.1),
            min_hazards: 1,
            max_hazards: 3,
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), MazeError> {
        self.maze.validate()?;
        check_scenario_size(self.maze.width, self.maze.height)?;
        if self.min_hazards > self.max_hazards {
            return Err(MazeError::HazardRange {
                min: self.min_hazards,
                max: self.max_hazards,
            });
        }
        Ok(())
    }
}

pub(crate) fn check_size(width: i32, height: i32) -> Result<(), MazeError> {
    if width < MIN_SIZE || height < MIN_SIZE {
        return Err(MazeError::TooSmall { width, height });
    }
    Ok(())
}

/// Start `(1, 1)` and exit `(width-2, height-2)` must be distinct cells;
/// they coincide at 3x3.
pub(crate) fn check_scenario_size(width: i32, height: i32) -> Result<(), MazeError> {
    check_size(width, height)?;
    if width == MIN_SIZE && height == MIN_SIZE {
        return Err(MazeError::TooSmall { width, height });
    }
    Ok(())
}

pub(crate) fn check_fraction(fraction: f64) -> Result<(), MazeError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(MazeError::InvalidFraction(fraction));
    }
    Ok(())
}

/// Errors raised by the maze generator for unusable settings.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// Width or height below [`MIN_SIZE`].
    TooSmall { width: i32, height: i32 },
    /// Loop fraction outside `[0, 1]` (or NaN).
    InvalidFraction(f64),
    /// `min_hazards` exceeds `max_hazards`.
    HazardRange { min: usize, max: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { width, height } => write!(
                f,
                "maze: {width}x{height} is too small (minimum {MIN_SIZE}x{MIN_SIZE})"
            ),
            Self::InvalidFraction(x) => write!(f, "maze: loop fraction {x} not in [0, 1]"),
            Self::HazardRange { min, max } => {
                write!(f, "maze: hazard count range {min}..={max} is empty")
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(MazeConfig::default().validate(), Ok(()));
        assert_eq!(ScenarioConfig::default().validate(), Ok(()));
    }

    #[test]
    fn size_limits() {
        assert_eq!(MazeConfig::new(3, 3, 0.0).validate(), Ok(()));
        assert_eq!(
            MazeConfig::new(2, 9, 0.0).validate(),
            Err(MazeError::TooSmall {
                width: 2,
                height: 9
            })
        );
        assert!(MazeConfig::new(9, -1, 0.0).validate().is_err());
    }

    #[test]
    fn fraction_limits() {
        assert_eq!(MazeConfig::new(5, 5, 1.0).validate(), Ok(()));
        assert_eq!(
            MazeConfig::new(5, 5, 1.5).validate(),
            Err(MazeError::InvalidFraction(1.5))
        );
        assert!(MazeConfig::new(5, 5, -0.1).validate().is_err());
        assert!(MazeConfig::new(5, 5, f64::NAN).validate().is_err());
    }

    #[test]
    fn scenario_default_size() {
        let cfg = ScenarioConfig::default();
        assert_eq!(cfg.maze, MazeConfig::new(51, 31, 0.1));
        assert_eq!((cfg.min_hazards, cfg.max_hazards), (1, 3));
    }

    #[test]
    fn hazard_range() {
        let cfg = ScenarioConfig {
            min_hazards: 4,
            max_hazards: 2,
            ..ScenarioConfig::default()
        };
        assert_eq!(cfg.validate(), Err(MazeError::HazardRange { min: 4, max: 2 }));
    }

    #[test]
    fn scenario_needs_distinct_corners() {
        let cfg = ScenarioConfig {
            maze: MazeConfig::new(3, 3, 0.0),
            ..ScenarioConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = ScenarioConfig {
            maze: MazeConfig::new(5, 3, 0.0),
            ..ScenarioConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }
}
