//! Hazard arrival times: multi-source breadth-first propagation.

use std::collections::VecDeque;

use emberpath_core::{Grid, Point, Range};

use crate::error::SearchError;
use crate::traits::Pather;

/// Arrival time of a hazard that never reaches a cell.
pub const NEVER: i32 = i32::MAX;

/// Per-cell hazard arrival times for one grid snapshot.
///
/// Sources hold 0, every other passable cell holds its step distance to
/// the nearest source, and cells the hazard cannot reach (walls included)
/// hold [`NEVER`]. Recompute whenever the grid's walls or sources change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHazardMap"))]
pub struct HazardMap {
    times: Vec<i32>,
    width: i32,
    height: i32,
}

impl HazardMap {
    /// A map where the hazard reaches nothing.
    pub fn never(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            times: vec![NEVER; len],
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// A map from precomputed row-major arrival times.
    ///
    /// Both dimensions must be positive and `times` must hold exactly
    /// `width × height` entries.
    pub fn from_times(width: i32, height: i32, times: Vec<i32>) -> Result<Self, SearchError> {
        if width < 1 || height < 1 || times.len() != (width as usize) * (height as usize) {
            return Err(SearchError::MapShape {
                width,
                height,
                times: times.len(),
            });
        }
        Ok(Self {
            times,
            width,
            height,
        })
    }

    /// Propagate from every hazard source of `grid` at once.
    ///
    /// The frontier is FIFO, so cells come off it in non-decreasing time
    /// order and each cell is assigned exactly once. Walls are never
    /// entered.
    pub fn propagate(grid: &Grid) -> Self {
        let mut map = Self::never(grid.width(), grid.height());
        let mut queue: VecDeque<usize> = VecDeque::new();

        for src in grid.hazard_sources() {
            if let Some(si) = map.idx(src) {
                map.times[si] = 0;
                queue.push_back(si);
            }
        }
        let sources = queue.len();

        let mut nbuf: Vec<Point> = Vec::with_capacity(4);

        while let Some(ci) = queue.pop_front() {
            let t = map.times[ci];
            let cp = map.point(ci);

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = map.idx(np) else {
                    continue;
                };
                if map.times[ni] <= t + 1 {
                    continue;
                }
                map.times[ni] = t + 1;
                queue.push_back(ni);
            }
        }

        log::debug!(
            "hazard: {sources} source(s) reached {} of {} cells",
            map.reached(),
            map.times.len()
        );
        map
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Arrival time at `p`, or [`NEVER`] if unreached or outside the map.
    #[inline]
    pub fn at(&self, p: Point) -> i32 {
        self.idx(p).map_or(NEVER, |i| self.times[i])
    }

    /// Arrival time at `p`, `None` if the hazard never gets there.
    #[inline]
    pub fn arrival(&self, p: Point) -> Option<i32> {
        Some(self.at(p)).filter(|&t| t != NEVER)
    }

    /// Whether `p` may be occupied at elapsed time `t`.
    ///
    /// Strict: arriving at the same instant as the hazard is not safe.
    #[inline]
    pub fn is_safe(&self, p: Point, t: i32) -> bool {
        self.at(p) > t
    }

    /// Whether walking `path` one step per tick, starting at tick 0, stays
    /// ahead of the hazard on every cell.
    pub fn outruns(&self, path: &[Point]) -> bool {
        path.iter()
            .enumerate()
            .all(|(t, &p)| i32::try_from(t).is_ok_and(|t| self.is_safe(p, t)))
    }

    /// Number of cells the hazard reaches.
    pub fn reached(&self) -> usize {
        self.times.iter().filter(|&&t| t != NEVER).count()
    }

    /// The bounding range of the map.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Iterate over `(Point, time)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.bounds().iter().zip(self.times.iter().copied())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHazardMap {
    times: Vec<i32>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHazardMap> for HazardMap {
    type Error = SearchError;

    fn try_from(raw: RawHazardMap) -> Result<Self, Self::Error> {
        HazardMap::from_times(raw.width, raw.height, raw.times)
    }
}

/// Compute the hazard arrival time of every cell of `grid`.
pub fn propagate(grid: &Grid) -> HazardMap {
    HazardMap::propagate(grid)
}
