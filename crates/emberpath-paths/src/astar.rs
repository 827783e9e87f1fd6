use std::collections::BinaryHeap;

use emberpath_core::{Grid, HazardMode, Point};

use crate::error::SearchError;
use crate::finder::{NodeRef, PathFinder, SearchResult};
use crate::hazard::HazardMap;
use crate::heuristic::Heuristic;
use crate::traits::Pather;

impl PathFinder {
    /// Shortest route from `from` to `to`, ignoring any hazard.
    ///
    /// Every move costs 1 and walls are impassable. The returned path has
    /// the optimal length for every [`Heuristic`]. An empty path means the
    /// exit cannot be reached.
    pub fn search_plain(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
        heuristic: Heuristic,
    ) -> Result<SearchResult, SearchError> {
        check_endpoints(grid, from, to)?;
        self.fit(grid.bounds());
        let result = self.astar(grid, from, to, heuristic, None);
        log::debug!(
            "plain {heuristic}: {} steps, {} expanded",
            result.steps(),
            result.expanded
        );
        Ok(result)
    }

    /// Shortest route from `from` to `to` that stays ahead of the hazard.
    ///
    /// The cost of reaching a cell is also the time at which it is
    /// occupied, and a cell may only be occupied at time `t` if
    /// `hazard.at(cell) > t`. Moves that would break this are pruned.
    ///
    /// Only the earliest arrival per cell is tracked and there is no
    /// waiting move. Since the hazard map does not depend on the route,
    /// arriving earlier never makes a later step less safe, so this loses
    /// nothing against a search over (cell, time) pairs. That stops being
    /// true if waiting is allowed at a different cost or if the agent can
    /// affect the hazard.
    pub fn search_with_hazard(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
        hazard: &HazardMap,
        heuristic: Heuristic,
    ) -> Result<SearchResult, SearchError> {
        check_endpoints(grid, from, to)?;
        if hazard.size() != grid.size() {
            return Err(SearchError::MapMismatch {
                grid: grid.size(),
                map: hazard.size(),
            });
        }
        if !hazard.is_safe(from, 0) {
            log::debug!("hazard {heuristic}: start {from} already burning");
            return Ok(SearchResult::unreachable());
        }
        self.fit(grid.bounds());
        let result = self.astar(grid, from, to, heuristic, Some(hazard));
        log::debug!(
            "hazard {heuristic}: {} steps, {} expanded",
            result.steps(),
            result.expanded
        );
        Ok(result)
    }

    fn astar<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        heuristic: Heuristic,
        hazard: Option<&HazardMap>,
    ) -> SearchResult {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return SearchResult::unreachable();
        };

        let cur_gen = self.next_generation();

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: heuristic.estimate(from, to),
            g: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].closed {
                continue;
            }
            self.nodes[ci].closed = true;

            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            if let Some(h) = hazard {
                if !h.is_safe(current_point, current_g) {
                    continue;
                }
            }

            if ci == goal_idx {
                break 'search true;
            }

            expanded += 1;

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                if let Some(h) = hazard {
                    if !h.is_safe(np, tentative_g) {
                        log::trace!("prune {np} at t={tentative_g}");
                        continue;
                    }
                }

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative_g;
                n.parent = ci;

                open.push(NodeRef {
                    idx: ni,
                    f: f64::from(tentative_g) + heuristic.estimate(np, to),
                    g: tentative_g,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return SearchResult {
                path: Vec::new(),
                expanded,
            };
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        SearchResult { path, expanded }
    }

    /// Find the grid's start and exit, derive the grid for `mode` and run
    /// the matching search: hazard-aware for [`HazardMode::Spreading`],
    /// plain otherwise.
    pub fn solve(
        &mut self,
        grid: &Grid,
        mode: HazardMode,
        heuristic: Heuristic,
    ) -> Result<SearchResult, SearchError> {
        let (start, exit) = grid.endpoints()?;
        let prepared = grid.for_mode(mode);
        match mode {
            HazardMode::Spreading => {
                let hazard = HazardMap::propagate(&prepared);
                self.search_with_hazard(&prepared, start, exit, &hazard, heuristic)
            }
            HazardMode::Walls | HazardMode::Ignored => {
                self.search_plain(&prepared, start, exit, heuristic)
            }
        }
    }
}

fn check_endpoints(grid: &Grid, from: Point, to: Point) -> Result<(), SearchError> {
    for p in [from, to] {
        if !grid.contains(p) {
            return Err(SearchError::OutOfBounds(p));
        }
        if !grid.is_passable(p) {
            return Err(SearchError::Blocked(p));
        }
    }
    Ok(())
}

/// One-off [`PathFinder::search_plain`] with a fresh workspace.
pub fn search_plain(
    grid: &Grid,
    from: Point,
    to: Point,
    heuristic: Heuristic,
) -> Result<SearchResult, SearchError> {
    PathFinder::new(grid.bounds()).search_plain(grid, from, to, heuristic)
}

/// One-off [`PathFinder::search_with_hazard`] with a fresh workspace.
pub fn search_with_hazard(
    grid: &Grid,
    from: Point,
    to: Point,
    hazard: &HazardMap,
    heuristic: Heuristic,
) -> Result<SearchResult, SearchError> {
    PathFinder::new(grid.bounds()).search_with_hazard(grid, from, to, hazard, heuristic)
}

/// One-off [`PathFinder::solve`] with a fresh workspace.
pub fn solve(grid: &Grid, mode: HazardMode, heuristic: Heuristic) -> Result<SearchResult, SearchError> {
    PathFinder::new(grid.bounds()).solve(grid, mode, heuristic)
}
