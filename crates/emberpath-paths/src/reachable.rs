//! Connectivity queries over passable cells.

use emberpath_core::{Grid, Point};

use crate::finder::PathFinder;
use crate::traits::Pather;

impl PathFinder {
    /// Flood-fill from `p` and return every cell connected to it,
    /// `p` first. Empty if `p` is outside the range or not passable.
    pub fn reachable(&mut self, grid: &Grid, p: Point) -> Vec<Point> {
        self.fit(grid.bounds());
        let len = self.rng.len();
        for v in self.labels[..len].iter_mut() {
            *v = -1;
        }

        let mut result = Vec::new();
        let Some(si) = self.idx(p) else {
            return result;
        };
        if !grid.is_passable(p) {
            return result;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        self.stack.clear();
        self.stack.push(si);
        self.labels[si] = 0;
        result.push(p);

        while let Some(ci) = self.stack.pop() {
            let cp = self.point(ci);
            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if let Some(ni) = self.idx(np) {
                    if self.labels[ni] < 0 {
                        self.labels[ni] = 0;
                        self.stack.push(ni);
                        result.push(np);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        result
    }

    /// Number of separate connected regions of passable cells.
    pub fn component_count(&mut self, grid: &Grid) -> usize {
        self.fit(grid.bounds());
        let len = self.rng.len();
        for v in self.labels[..len].iter_mut() {
            *v = -1;
        }

        let mut label: i32 = 0;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for start in 0..len {
            if self.labels[start] >= 0 || !grid.is_passable(self.point(start)) {
                continue;
            }

            // Iterative DFS from `start`.
            self.stack.clear();
            self.stack.push(start);
            self.labels[start] = label;

            while let Some(ci) = self.stack.pop() {
                let cp = self.point(ci);
                nbuf.clear();
                grid.neighbors(cp, &mut nbuf);

                for &np in nbuf.iter() {
                    if let Some(ni) = self.idx(np) {
                        if self.labels[ni] < 0 {
                            self.labels[ni] = label;
                            self.stack.push(ni);
                        }
                    }
                }
            }

            label += 1;
        }

        self.nbuf = nbuf;
        label as usize
    }
}
