//! Maze generation: recursive-backtracker carving plus loop injection.
//!
//! Carving works on the odd-coordinate lattice: every cell with odd x and
//! odd y strictly inside the border is opened exactly once, joined to one
//! earlier cell through the wall between them. The result is a perfect
//! maze, a spanning tree over the lattice. [`MazeGen::add_loops`] then
//! knocks out some walls to create cycles.

use emberpath_core::{CellKind, Grid, Point};
use rand::Rng;

use crate::config::{
    MazeConfig, MazeError, ScenarioConfig, check_fraction, check_scenario_size, check_size,
};

/// Step-2 moves between lattice cells.
const JUMPS: [Point; 4] = [
    Point::new(0, -2),
    Point::new(0, 2),
    Point::new(-2, 0),
    Point::new(2, 0),
];

/// Maze generator driven by an explicit random source.
///
/// The same seed always yields the same maze.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze of the given size.
    ///
    /// The border is always wall. `(1, 1)` and `(width-2, height-2)` are
    /// always open. With an even dimension the far corner is off the
    /// lattice and hangs off it by a one- or two-cell spur, so the open
    /// cells still form a single tree for every size.
    pub fn carve(&mut self, width: i32, height: i32) -> Result<Grid, MazeError> {
        check_size(width, height)?;
        let mut grid = Grid::new(width, height, CellKind::Wall)
            .map_err(|_| MazeError::TooSmall { width, height })?;
        let interior = grid.bounds().shift(1, 1, -1, -1);

        let origin = Point::new(1, 1);
        grid.set(origin, CellKind::Free);
        let mut stack = vec![origin];
        let mut carved = 1usize;
        let mut options: Vec<Point> = Vec::with_capacity(4);

        while let Some(&p) = stack.last() {
            options.clear();
            options.extend(
                JUMPS
                    .iter()
                    .map(|&d| p + d)
                    .filter(|&n| interior.contains(n) && grid.at(n) == Some(CellKind::Wall)),
            );

            if options.is_empty() {
                stack.pop();
                continue;
            }

            let next = options[self.rng.random_range(0..options.len())];
            let between = Point::new((p.x + next.x) / 2, (p.y + next.y) / 2);
            grid.set(between, CellKind::Free);
            grid.set(next, CellKind::Free);
            stack.push(next);
            carved += 1;
        }

        grid.set(origin, CellKind::Free);
        let corner = Point::new(width - 2, height - 2);
        grid.set(corner, CellKind::Free);

        // An even dimension puts the far corner off the lattice: join it
        // to the nearest lattice cell through cells no passage uses.
        let lattice = Point::new(corner.x - (1 - corner.x % 2), corner.y - (1 - corner.y % 2));
        let mut link = corner;
        while link.x > lattice.x {
            link = link.shift(-1, 0);
            grid.set(link, CellKind::Free);
        }
        while link.y > lattice.y {
            link = link.shift(0, -1);
            grid.set(link, CellKind::Free);
        }

        log::debug!("maze: carved {carved} lattice cells in {width}x{height}");
        Ok(grid)
    }

    /// Open a `fraction` of the interior walls touching at least two open
    /// cells, chosen uniformly without replacement.
    ///
    /// Candidates are collected once, before any wall is removed. Opening
    /// walls never disconnects cells that were connected. Returns the
    /// number of walls opened.
    pub fn add_loops(&mut self, grid: &mut Grid, fraction: f64) -> Result<usize, MazeError> {
        check_fraction(fraction)?;
        let interior = grid.bounds().shift(1, 1, -1, -1);

        let mut candidates: Vec<Point> = interior
            .iter()
            .filter(|&p| grid.at(p) == Some(CellKind::Wall))
            .filter(|&p| {
                p.neighbors_4()
                    .iter()
                    .filter(|&&n| grid.is_passable(n))
                    .count()
                    >= 2
            })
            .collect();

        let count = (candidates.len() as f64 * fraction) as usize;
        // Partial Fisher-Yates: the first `count` slots become the sample.
        for i in 0..count {
            let j = self.rng.random_range(i..candidates.len());
            candidates.swap(i, j);
            grid.set(candidates[i], CellKind::Free);
        }

        log::debug!(
            "maze: opened {count} of {} loop candidates",
            candidates.len()
        );
        Ok(count)
    }

    /// Carve a maze and add loops as configured.
    pub fn generate(&mut self, config: &MazeConfig) -> Result<Grid, MazeError> {
        config.validate()?;
        let mut grid = self.carve(config.width, config.height)?;
        self.add_loops(&mut grid, config.loop_fraction)?;
        Ok(grid)
    }

    /// Generate a maze and mark it up as a complete scenario: start at
    /// `(1, 1)`, exit at `(width-2, height-2)` and a random number of hazard
    /// sources in `min_hazards..=max_hazards` on distinct free cells.
    pub fn scenario(&mut self, config: &ScenarioConfig) -> Result<Grid, MazeError> {
        config.validate()?;
        let grid = self.generate(&config.maze)?;
        let count = self
            .rng
            .random_range(config.min_hazards..=config.max_hazards);
        self.annotate(&grid, count)
    }

    /// Return a copy of `grid` with start, exit and up to `hazards` hazard
    /// sources placed. Sources go on free cells only, never on the start
    /// or exit; fewer are placed if there is not enough room.
    ///
    /// Fails on grids where the start and exit would not be two distinct
    /// interior cells.
    pub fn annotate(&mut self, grid: &Grid, hazards: usize) -> Result<Grid, MazeError> {
        check_scenario_size(grid.width(), grid.height())?;
        let mut out = grid.clone();
        let start = Point::new(1, 1);
        let exit = Point::new(grid.width() - 2, grid.height() - 2);
        out.set(start, CellKind::Start);
        out.set(exit, CellKind::Exit);

        let mut free: Vec<Point> = out.positions(CellKind::Free).collect();
        let count = hazards.min(free.len());
        for i in 0..count {
            let j = self.rng.random_range(i..free.len());
            free.swap(i, j);
            out.set(free[i], CellKind::HazardSource);
        }
        if count < hazards {
            log::warn!("maze: room for only {count} of {hazards} hazard sources");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn maze_gen(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn same_seed_same_maze() {
        let cfg = MazeConfig::new(21, 15, 0.2);
        let a = maze_gen(7).generate(&cfg).unwrap();
        let b = maze_gen(7).generate(&cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn smallest_maze_is_one_cell() {
        let g = maze_gen(1).carve(3, 3).unwrap();
        assert_eq!(g.count(CellKind::Free), 1);
        assert_eq!(g.at(Point::new(1, 1)), Some(CellKind::Free));
    }

    #[test]
    fn border_stays_wall() {
        let g = maze_gen(3).generate(&MazeConfig::new(15, 11, 1.0)).unwrap();
        for (p, c) in g.iter() {
            if p.x == 0 || p.y == 0 || p.x == 14 || p.y == 10 {
                assert_eq!(c, CellKind::Wall, "{p}");
            }
        }
    }

    #[test]
    fn every_lattice_cell_is_opened() {
        let g = maze_gen(11).carve(17, 9).unwrap();
        for y in (1..8).step_by(2) {
            for x in (1..16).step_by(2) {
                assert_eq!(g.at(Point::new(x, y)), Some(CellKind::Free));
            }
        }
        // Cells with both coordinates even are never carved.
        for y in (2..8).step_by(2) {
            for x in (2..16).step_by(2) {
                assert_eq!(g.at(Point::new(x, y)), Some(CellKind::Wall));
            }
        }
        // 8 x 4 lattice cells plus one passage per tree edge.
        assert_eq!(g.count(CellKind::Free), 32 + 31);
    }

    #[test]
    fn corners_forced_open_on_even_sizes() {
        let g = maze_gen(5).carve(8, 6).unwrap();
        assert_eq!(g.at(Point::new(1, 1)), Some(CellKind::Free));
        // (6,4) joins lattice cell (5,3) through (5,4).
        for p in [Point::new(6, 4), Point::new(5, 4), Point::new(5, 3)] {
            assert_eq!(g.at(p), Some(CellKind::Free), "{p}");
        }
        assert_eq!(g.at(Point::new(6, 3)), Some(CellKind::Wall));

        // (6,5) touches lattice cell (5,5) directly.
        let g = maze_gen(5).carve(8, 7).unwrap();
        assert_eq!(g.at(Point::new(6, 5)), Some(CellKind::Free));
        // 3 x 3 lattice cells, 8 passages, the corner.
        assert_eq!(g.count(CellKind::Free), 9 + 8 + 1);
    }

    #[test]
    fn zero_fraction_opens_nothing() {
        let mut mg = maze_gen(2);
        let mut g = mg.carve(21, 21).unwrap();
        let before = g.clone();
        assert_eq!(mg.add_loops(&mut g, 0.0).unwrap(), 0);
        assert_eq!(g, before);
    }

    #[test]
    fn full_fraction_opens_every_candidate() {
        let mut mg = maze_gen(2);
        let mut g = mg.carve(21, 21).unwrap();
        let candidates = g
            .bounds()
            .shift(1, 1, -1, -1)
            .iter()
            .filter(|&p| g.at(p) == Some(CellKind::Wall))
            .filter(|&p| p.neighbors_4().iter().filter(|&&n| g.is_passable(n)).count() >= 2)
            .count();
        let free_before = g.count(CellKind::Free);
        let opened = mg.add_loops(&mut g, 1.0).unwrap();
        assert_eq!(opened, candidates);
        assert_eq!(g.count(CellKind::Free), free_before + candidates);
    }

    #[test]
    fn loops_only_remove_walls() {
        let mut mg = maze_gen(9);
        let perfect = mg.carve(25, 19).unwrap();
        let mut looped = perfect.clone();
        let opened = mg.add_loops(&mut looped, 0.5).unwrap();
        assert!(opened > 0);
        for (p, c) in perfect.iter() {
            if c == CellKind::Free {
                assert_eq!(looped.at(p), Some(CellKind::Free));
            }
        }
        assert_eq!(
            looped.count(CellKind::Free),
            perfect.count(CellKind::Free) + opened
        );
    }

    #[test]
    fn bad_settings_rejected() {
        let mut mg = maze_gen(0);
        assert_eq!(
            mg.carve(2, 5),
            Err(MazeError::TooSmall {
                width: 2,
                height: 5
            })
        );
        let mut g = mg.carve(5, 5).unwrap();
        assert_eq!(
            mg.add_loops(&mut g, 2.0),
            Err(MazeError::InvalidFraction(2.0))
        );
        assert!(mg.generate(&MazeConfig::new(9, 9, -1.0)).is_err());
    }

    #[test]
    fn scenario_markers() {
        let cfg = ScenarioConfig {
            maze: MazeConfig::new(31, 21, 0.1),
            min_hazards: 2,
            max_hazards: 4,
        };
        let g = maze_gen(4).scenario(&cfg).unwrap();
        assert_eq!(g.endpoints(), Ok((Point::new(1, 1), Point::new(29, 19))));
        let hazards = g.hazard_sources().len();
        assert!((2..=4).contains(&hazards), "{hazards}");
    }

    #[test]
    fn annotate_caps_hazards_at_free_cells() {
        let mut mg = maze_gen(6);
        let g = mg.carve(5, 3).unwrap();
        // Free cells: (1,1), (2,1), (3,1); two become start and exit.
        let marked = mg.annotate(&g, 5).unwrap();
        assert_eq!(marked.hazard_sources(), vec![Point::new(2, 1)]);
        assert_eq!(marked.start(), Ok(Point::new(1, 1)));
        assert_eq!(marked.exit(), Ok(Point::new(3, 1)));
        // The input grid is untouched.
        assert_eq!(g.count(CellKind::Start), 0);
    }

    #[test]
    fn annotate_needs_distinct_corners() {
        let mut mg = maze_gen(6);
        let g = mg.carve(3, 3).unwrap();
        assert_eq!(
            mg.annotate(&g, 0),
            Err(MazeError::TooSmall {
                width: 3,
                height: 3
            })
        );
        let tiny = Grid::new(2, 2, CellKind::Free).unwrap();
        assert!(mg.annotate(&tiny, 0).is_err());

        let g = mg.carve(3, 5).unwrap();
        let marked = mg.annotate(&g, 0).unwrap();
        assert_eq!(marked.endpoints(), Ok((Point::new(1, 1), Point::new(1, 3))));
    }
}
