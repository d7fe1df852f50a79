//! Property tests for maze generation

use std::collections::VecDeque;

use maze_runner::sim::{Cell, Maze};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

const TILE: i32 = 30;

fn generate(width: usize, height: usize, seed: u64) -> Maze {
    let mut rng = Pcg32::seed_from_u64(seed);
    Maze::generate(width, height, TILE, &mut rng)
}

/// Passable cells reachable from the start cell
fn flood_from_start(maze: &Maze) -> Vec<bool> {
    let (w, h) = (maze.width(), maze.height());
    let mut seen = vec![false; w * h];
    let (sc, sr) = maze.start_cell();
    seen[sr * w + sc] = true;
    let mut queue = VecDeque::from([(sc, sr)]);
    while let Some((c, r)) = queue.pop_front() {
        let mut visit = |nc: usize, nr: usize| {
            if nc < w && nr < h && !seen[nr * w + nc] && maze.cell(nc, nr).is_passable() {
                seen[nr * w + nc] = true;
                queue.push_back((nc, nr));
            }
        };
        if c > 0 {
            visit(c - 1, r);
        }
        if r > 0 {
            visit(c, r - 1);
        }
        visit(c + 1, r);
        visit(c, r + 1);
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn exit_reachable_and_all_floor_connected(
        w in 3usize..32,
        h in 3usize..32,
        seed in any::<u64>(),
    ) {
        let maze = generate(w, h, seed);
        let seen = flood_from_start(&maze);
        let (ec, er) = maze.exit_cell();
        prop_assert!(seen[er * w + ec]);
        for ((c, r), cell) in maze.grid().iter() {
            if cell.is_passable() {
                prop_assert!(seen[r * w + c], "({}, {}) cut off", c, r);
            }
        }
    }

    #[test]
    fn outer_ring_is_wall(w in 3usize..32, h in 3usize..32, seed in any::<u64>()) {
        let maze = generate(w, h, seed);
        for c in 0..w {
            prop_assert_eq!(maze.cell(c, 0), Cell::Wall);
            prop_assert_eq!(maze.cell(c, h - 1), Cell::Wall);
        }
        for r in 0..h {
            prop_assert_eq!(maze.cell(0, r), Cell::Wall);
            prop_assert_eq!(maze.cell(w - 1, r), Cell::Wall);
        }
    }

    #[test]
    fn no_double_thick_right_or_bottom_edge(
        w in 3usize..32,
        h in 3usize..32,
        seed in any::<u64>(),
    ) {
        let maze = generate(w, h, seed);
        for r in 1..h - 1 {
            prop_assert!(!(maze.cell(w - 2, r) == Cell::Wall && maze.cell(w - 1, r) == Cell::Wall));
        }
        for c in 1..w - 1 {
            prop_assert!(!(maze.cell(c, h - 2) == Cell::Wall && maze.cell(c, h - 1) == Cell::Wall));
        }
    }

    #[test]
    fn start_and_exit_distinct_unless_single_cell(
        w in 3usize..32,
        h in 3usize..32,
        seed in any::<u64>(),
    ) {
        let maze = generate(w, h, seed);
        let passable = maze.grid().iter().filter(|(_, c)| c.is_passable()).count();
        if passable > 1 {
            prop_assert_ne!(maze.start_cell(), maze.exit_cell());
            let (sc, sr) = maze.start_cell();
            prop_assert_eq!(maze.cell(sc, sr), Cell::Start);
        }
        let (ec, er) = maze.exit_cell();
        prop_assert_eq!(maze.cell(ec, er), Cell::Exit);
    }

    #[test]
    fn spatial_index_matches_grid(w in 3usize..32, h in 3usize..32, seed in any::<u64>()) {
        let maze = generate(w, h, seed);
        let walls = maze.grid().iter().filter(|(_, c)| *c == Cell::Wall).count();
        prop_assert_eq!(maze.wall_rects().len(), walls);
        prop_assert_eq!(maze.floor_coords().len(), w * h - walls);
        prop_assert!(maze.wall_rects().iter().all(|r| r.w == TILE && r.h == TILE));
        prop_assert_eq!(maze.exit_rect(), Some(maze.cell_rect(maze.exit_cell())));
    }

    #[test]
    fn same_seed_same_maze(w in 3usize..32, h in 3usize..32, seed in any::<u64>()) {
        let a = generate(w, h, seed);
        let b = generate(w, h, seed);
        prop_assert_eq!(a.grid(), b.grid());
        prop_assert_eq!(a.start_cell(), b.start_cell());
        prop_assert_eq!(a.exit_cell(), b.exit_cell());
    }
}
