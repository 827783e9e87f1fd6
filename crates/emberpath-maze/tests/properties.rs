//! Properties of generated mazes and of the searches run over them,
//! checked across many fixed seeds.

use emberpath_core::{CellKind, Grid, HazardMode, Point};
use emberpath_maze::{MazeConfig, MazeGen, ScenarioConfig};
use emberpath_paths::{
    HazardMap, Heuristic, NEVER, PathFinder, propagate, search_plain, search_with_hazard,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEEDS: std::ops::Range<u64> = 0..40;
const SIZES: [(i32, i32); 7] = [
    (5, 5),
    (21, 21),
    (51, 31),
    (9, 27),
    (8, 8),
    (20, 13),
    (4, 3),
];

fn maze_gen(seed: u64) -> MazeGen<StdRng> {
    MazeGen::new(StdRng::seed_from_u64(seed))
}

/// Number of 4-adjacent pairs of open cells.
fn open_edges(grid: &Grid) -> usize {
    grid.iter()
        .filter(|&(_, c)| c.is_passable())
        .map(|(p, _)| {
            [p.shift(1, 0), p.shift(0, 1)]
                .into_iter()
                .filter(|&n| grid.is_passable(n))
                .count()
        })
        .sum()
}

fn open_cells(grid: &Grid) -> usize {
    grid.iter().filter(|&(_, c)| c.is_passable()).count()
}

/// Exact step distance from `from` to `to`, found by letting a single
/// hazard source spread from `from` over a hazard-free copy of the grid.
fn true_distance(grid: &Grid, from: Point, to: Point) -> i32 {
    let mut probe = grid.for_mode(HazardMode::Ignored);
    probe.set(from, CellKind::HazardSource);
    propagate(&probe).at(to)
}

fn assert_walkable(grid: &Grid, path: &[Point]) {
    for w in path.windows(2) {
        assert!(w[0].is_adjacent_4(w[1]), "{} -> {}", w[0], w[1]);
    }
    for &q in path {
        assert!(grid.is_passable(q), "{q} is a wall");
    }
}

#[test]
fn perfect_mazes_are_spanning_trees() {
    for (w, h) in SIZES {
        for seed in SEEDS {
            let g = maze_gen(seed).generate(&MazeConfig::new(w, h, 0.0)).unwrap();
            let mut pf = PathFinder::new(g.bounds());
            assert_eq!(pf.component_count(&g), 1, "{w}x{h} seed {seed}");
            assert_eq!(open_edges(&g), open_cells(&g) - 1, "{w}x{h} seed {seed}");
        }
    }
}

#[test]
fn loops_keep_connectivity_and_add_cycles() {
    for (w, h) in SIZES {
        for seed in SEEDS {
            let mut mg = maze_gen(seed);
            let perfect = mg.carve(w, h).unwrap();
            let mut looped = perfect.clone();
            let opened = mg.add_loops(&mut looped, 0.3).unwrap();

            let mut pf = PathFinder::new(looped.bounds());
            assert_eq!(pf.component_count(&looped), 1);
            let reach = pf.reachable(&looped, Point::new(1, 1));
            assert_eq!(reach.len(), open_cells(&looped));
            for (p, c) in perfect.iter() {
                if c.is_passable() {
                    assert!(looped.is_passable(p));
                }
            }
            // Each opened wall touches at least two open cells.
            assert!(open_edges(&looped) >= open_edges(&perfect) + 2 * opened);
        }
    }
}

#[test]
fn hazard_gradient_is_at_most_one() {
    for seed in SEEDS {
        let cfg = ScenarioConfig {
            maze: MazeConfig::new(31, 21, 0.2),
            min_hazards: 1,
            max_hazards: 4,
        };
        let g = maze_gen(seed).scenario(&cfg).unwrap();
        let hazard = propagate(&g);
        for src in g.hazard_sources() {
            assert_eq!(hazard.at(src), 0);
        }
        for (p, t) in hazard.iter() {
            if !g.is_passable(p) {
                assert_eq!(t, NEVER, "wall {p} reached");
                continue;
            }
            for n in p.neighbors_4() {
                let u = hazard.at(n);
                if t != NEVER && u != NEVER {
                    assert!((t - u).abs() <= 1, "seed {seed}: {p}={t}, {n}={u}");
                }
            }
        }
    }
}

#[test]
fn no_sources_never_burns() {
    for seed in 0..10 {
        let g = maze_gen(seed).generate(&MazeConfig::default()).unwrap();
        let hazard = propagate(&g);
        assert!(hazard.iter().all(|(_, t)| t == NEVER));
    }
}

#[test]
fn plain_search_is_optimal_for_every_heuristic() {
    for (w, h) in SIZES {
        for seed in SEEDS {
            let cfg = ScenarioConfig {
                maze: MazeConfig::new(w, h, 0.15),
                ..ScenarioConfig::default()
            };
            let g = maze_gen(seed).scenario(&cfg).unwrap();
            let (s, e) = g.endpoints().unwrap();
            let expected = true_distance(&g, s, e);
            let mut pf = PathFinder::new(g.bounds());
            for heuristic in Heuristic::ALL {
                let r = pf.search_plain(&g, s, e, heuristic).unwrap();
                assert_eq!(r.steps() as i32, expected, "{w}x{h} seed {seed} {heuristic}");
                assert_eq!(r.path.first(), Some(&s));
                assert_eq!(r.path.last(), Some(&e));
                assert_walkable(&g, &r.path);
            }
        }
    }
}

#[test]
fn hazard_paths_stay_ahead_of_the_fire() {
    for seed in SEEDS {
        let cfg = ScenarioConfig {
            maze: MazeConfig::new(41, 25, 0.2),
            min_hazards: 1,
            max_hazards: 3,
        };
        let g = maze_gen(seed).scenario(&cfg).unwrap();
        let (s, e) = g.endpoints().unwrap();
        let hazard = propagate(&g);
        let plain = search_plain(&g, s, e, Heuristic::Manhattan).unwrap();
        for heuristic in Heuristic::ALL {
            let r = search_with_hazard(&g, s, e, &hazard, heuristic).unwrap();
            if !r.found() {
                continue;
            }
            assert_walkable(&g, &r.path);
            for (i, &p) in r.path.iter().enumerate() {
                assert!(hazard.at(p) > i as i32, "seed {seed}: {p} at t={i}");
            }
            // The hazard spreads over the same cells the agent walks, so a
            // safe route is always a shortest one.
            assert_eq!(r.steps(), plain.steps());
        }
    }
}

#[test]
fn safe_shortest_route_is_always_found() {
    let mut checked = 0;
    for seed in SEEDS {
        let cfg = ScenarioConfig {
            maze: MazeConfig::new(31, 21, 0.1),
            min_hazards: 0,
            max_hazards: 0,
        };
        let g = maze_gen(seed).scenario(&cfg).unwrap();
        let (s, e) = g.endpoints().unwrap();
        let plain = search_plain(&g, s, e, Heuristic::Zero).unwrap();

        // Light a single fire somewhere the plain route still outruns.
        let witness = g.positions(CellKind::Free).find_map(|f| {
            let mut lit = g.clone();
            lit.set(f, CellKind::HazardSource);
            let hazard = propagate(&lit);
            hazard.outruns(&plain.path).then_some((lit, hazard))
        });
        let Some((lit, hazard)) = witness else {
            continue;
        };
        checked += 1;

        for heuristic in Heuristic::ALL {
            let r = search_with_hazard(&lit, s, e, &hazard, heuristic).unwrap();
            assert!(r.found(), "seed {seed} {heuristic}");
            assert_eq!(r.steps(), plain.steps());
            assert!(hazard.outruns(&r.path));
        }
    }
    assert!(checked > 0, "no seed had a survivable fire position");
}

#[test]
fn heuristics_agree_on_hazard_reachability() {
    for seed in SEEDS {
        let g = maze_gen(seed).scenario(&ScenarioConfig::default()).unwrap();
        let (s, e) = g.endpoints().unwrap();
        let hazard = propagate(&g);
        let outcomes: Vec<bool> = Heuristic::ALL
            .iter()
            .map(|&h| search_with_hazard(&g, s, e, &hazard, h).unwrap().found())
            .collect();
        assert!(outcomes.iter().all(|&f| f == outcomes[0]), "seed {seed}");
    }
}

#[test]
fn burning_start_is_always_empty() {
    for seed in 0..20 {
        let g = maze_gen(seed).scenario(&ScenarioConfig::default()).unwrap();
        let (s, e) = g.endpoints().unwrap();
        let mut lit = g.clone();
        lit.set(s, CellKind::HazardSource);
        let hazard = propagate(&lit);
        for heuristic in Heuristic::ALL {
            let r = search_with_hazard(&g, s, e, &hazard, heuristic).unwrap();
            assert!(r.path.is_empty());
            assert_eq!(r.expanded, 0);
        }
    }
}

#[test]
fn hazard_modes_relate() {
    for seed in SEEDS {
        let g = maze_gen(seed).scenario(&ScenarioConfig::default()).unwrap();
        let mut pf = PathFinder::new(g.bounds());
        let ignored = pf.solve(&g, HazardMode::Ignored, Heuristic::Manhattan).unwrap();
        let walls = pf.solve(&g, HazardMode::Walls, Heuristic::Manhattan).unwrap();
        let spreading = pf.solve(&g, HazardMode::Spreading, Heuristic::Manhattan).unwrap();

        // Ignoring the hazard is the least constrained: a perfect maze plus
        // loops is connected, so a route always exists.
        assert!(ignored.found());
        if walls.found() {
            assert!(walls.steps() >= ignored.steps());
            for p in &walls.path {
                assert_ne!(g.at(*p), Some(CellKind::HazardSource));
            }
        }
        if spreading.found() {
            assert_eq!(spreading.steps(), ignored.steps());
        }
    }
}

#[test]
fn hazard_map_matches_grid_size() {
    let g = maze_gen(1).generate(&MazeConfig::new(13, 7, 0.0)).unwrap();
    let hazard: HazardMap = propagate(&g);
    assert_eq!(hazard.size(), g.size());
}
