//! **emberpath-core**: grid model for hazard-aware maze search.
//!
//! This crate provides the types shared by the rest of the workspace:
//! geometry primitives, the [`CellKind`] symbols, the immutable [`Grid`]
//! with its text codec, and the [`HazardMode`] grid derivations.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod mode;

pub use cell::CellKind;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use mode::{HazardMode, ParseModeError};
