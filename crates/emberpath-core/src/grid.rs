//! The [`Grid`] type: a rectangular map of [`CellKind`]s.
//!
//! A grid is built once (by the maze generator or by parsing text) and then
//! only read by hazard propagation and search. Variants such as "hazards as
//! walls" are produced as new grids with [`Grid::for_mode`] so a shared grid
//! is never modified behind a reader's back.

use std::fmt;

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::mode::HazardMode;

/// A rectangular grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: Vec<CellKind>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a `width × height` grid filled with `fill`.
    pub fn new(width: i32, height: i32, fill: CellKind) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells: vec![fill; (width as usize) * (height as usize)],
            width,
            height,
        })
    }

    /// Parse a grid from its text form, one row per line.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Every row must have the same width, only the
    /// symbols `#.DSF` are accepted, and at most one `D` and one `S` may
    /// appear.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s.trim().lines().collect();
        Self::from_rows(&rows)
    }

    /// Build a grid from individual rows. Same rules as [`parse`](Self::parse).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let expected = first.as_ref().chars().count();
        if expected == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(GridError::Ragged {
                    row: y,
                    expected,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                cells.push(CellKind::from_char(ch).ok_or(GridError::InvalidSymbol { ch, pos })?);
            }
        }

        Self::from_cells(expected as i32, rows.len() as i32, cells)
    }

    /// Build a grid from row-major cells.
    ///
    /// Fails unless both dimensions are positive, `cells` holds exactly
    /// `width × height` entries and there is at most one start and one exit.
    pub fn from_cells(width: i32, height: i32, cells: Vec<CellKind>) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::Empty);
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        let grid = Self {
            cells,
            width,
            height,
        };
        // Missing markers are fine here; repeated ones are not.
        for found in [grid.start(), grid.exit()] {
            if let Err(e @ (GridError::DuplicateStart { .. } | GridError::DuplicateExit { .. })) =
                found
            {
                return Err(e);
            }
        }
        Ok(grid)
    }

    /// The bounding range `[0, 0) - (width, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, kind: CellKind) {
        if let Some(i) = self.index(p) {
            self.cells[i] = kind;
        }
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellKind::is_passable)
    }

    /// Count how many cells equal `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Iterate over `(Point, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Positions holding `kind`, in row-major order.
    pub fn positions(&self, kind: CellKind) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(move |&(_, c)| c == kind).map(|(p, _)| p)
    }

    /// All hazard source positions, in row-major order.
    pub fn hazard_sources(&self) -> Vec<Point> {
        self.positions(CellKind::HazardSource).collect()
    }

    /// The unique start cell.
    pub fn start(&self) -> Result<Point, GridError> {
        let mut it = self.positions(CellKind::Start);
        let first = it.next().ok_or(GridError::MissingStart)?;
        match it.next() {
            Some(second) => Err(GridError::DuplicateStart { first, second }),
            None => Ok(first),
        }
    }

    /// The unique exit cell.
    pub fn exit(&self) -> Result<Point, GridError> {
        let mut it = self.positions(CellKind::Exit);
        let first = it.next().ok_or(GridError::MissingExit)?;
        match it.next() {
            Some(second) => Err(GridError::DuplicateExit { first, second }),
            None => Ok(first),
        }
    }

    /// Start and exit together, failing if either is missing or repeated.
    pub fn endpoints(&self) -> Result<(Point, Point), GridError> {
        Ok((self.start()?, self.exit()?))
    }

    /// A new grid with `f` applied to every cell.
    pub fn map_cells(&self, mut f: impl FnMut(Point, CellKind) -> CellKind) -> Grid {
        let cells = self.iter().map(|(p, c)| f(p, c)).collect();
        Grid {
            cells,
            width: self.width,
            height: self.height,
        }
    }

    /// The grid a search should see under the given hazard treatment.
    ///
    /// `Spreading` keeps the sources (they propagate through
    /// [`HazardMode`]-aware searches), `Walls` turns each source into a wall
    /// and `Ignored` turns each source into free floor.
    pub fn for_mode(&self, mode: HazardMode) -> Grid {
        let replacement = match mode {
            HazardMode::Spreading => return self.clone(),
            HazardMode::Walls => CellKind::Wall,
            HazardMode::Ignored => CellKind::Free,
        };
        self.map_cells(|_, c| {
            if c == CellKind::HazardSource {
                replacement
            } else {
                c
            }
        })
    }
}

/// Unchecked serialized form; [`Grid::from_cells`] validates it.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<CellKind>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_cells(raw.width, raw.height, raw.cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
