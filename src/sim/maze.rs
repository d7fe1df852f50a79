//! Procedural maze generation
//!
//! Randomized depth-first search over a stride-2 lattice inside a solid wall
//! ring, followed by start/exit placement and a pass that thins the
//! double-thick wall the lattice leaves on the right and bottom edges.

use glam::{IVec2, Vec2};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spatial::SpatialIndex;
use crate::consts::EXIT_DISTANCE_FRACTION;

/// A maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Floor,
    Start,
    Exit,
}

impl Cell {
    /// Anything but a wall can be walked on
    #[inline]
    pub fn is_passable(self) -> bool {
        self != Cell::Wall
    }

    /// Single-character form for text dumps
    pub fn as_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
            Cell::Start => 'S',
            Cell::Exit => 'E',
        }
    }
}

/// Grid coordinate (column, row)
pub type GridPos = (usize, usize);

/// Lattice neighbour offsets, in the order they are tried
const LATTICE_STEPS: [(isize, isize); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

/// A rectangular cell grid, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every cell set to `fill`
    pub fn filled(width: usize, height: usize, fill: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// All cells with their coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| ((i % self.width, i / self.width), cell))
    }

    /// Coordinates of every cell equal to `kind`, row-major
    pub fn positions_of(&self, kind: Cell) -> Vec<GridPos> {
        self.iter()
            .filter(|&(_, cell)| cell == kind)
            .map(|(pos, _)| pos)
            .collect()
    }
}

/// A generated level layout plus its derived collision geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    grid: Grid,
    tile_size: i32,
    start_cell: GridPos,
    exit_cell: GridPos,
    index: SpatialIndex,
}

impl Maze {
    /// Generate a new maze of `width` x `height` cells.
    ///
    /// Never fails: too-small grids degrade to an open interior (or a single
    /// forced floor cell), and an unreachable exit distance settles for the
    /// last candidate tried.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        tile_size: i32,
        rng: &mut R,
    ) -> Self {
        if width == 0 || height == 0 {
            log::warn!("Maze size {}x{} clamped to at least 1x1", width, height);
        }
        let width = width.max(1);
        let height = height.max(1);

        let mut grid = Grid::filled(width, height, Cell::Wall);
        let degenerate = width <= 2 || height <= 2;

        if degenerate {
            log::warn!(
                "Grid {}x{} too small for a maze interior; opening the interior",
                width,
                height
            );
            open_interior(&mut grid);
        } else {
            carve_passages(&mut grid, rng);
        }

        let (start_cell, exit_cell) = place_start_exit(&mut grid, rng);
        // Thinning would open the outer ring of a degenerate grid
        if !degenerate {
            thin_edge_walls(&mut grid);
        }

        let index = SpatialIndex::build(&grid, tile_size);
        log::debug!(
            "Generated {}x{} maze: start {:?}, exit {:?}, {} walls, {} floor cells",
            width,
            height,
            start_cell,
            exit_cell,
            index.wall_rects().len(),
            index.floor_coords().len()
        );

        Self {
            grid,
            tile_size,
            start_cell,
            exit_cell,
            index,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.grid.get(col, row)
    }

    #[inline]
    pub fn start_cell(&self) -> GridPos {
        self.start_cell
    }

    #[inline]
    pub fn exit_cell(&self) -> GridPos {
        self.exit_cell
    }

    /// Derived collision/spawn geometry
    #[inline]
    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// One tile-sized rect per wall cell, row-major
    #[inline]
    pub fn wall_rects(&self) -> &[Rect] {
        self.index.wall_rects()
    }

    #[inline]
    pub fn exit_rect(&self) -> Option<Rect> {
        self.index.exit_rect()
    }

    #[inline]
    pub fn floor_coords(&self) -> &[IVec2] {
        self.index.floor_coords()
    }

    /// Pixel rectangle covered by a cell
    pub fn cell_rect(&self, (col, row): GridPos) -> Rect {
        cell_rect(col, row, self.tile_size)
    }

    /// Pixel centre of the start cell
    pub fn start_center(&self) -> Vec2 {
        self.cell_rect(self.start_cell).center_f32()
    }

    /// Text dump, one line per row
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for row in 0..self.height() {
            out.extend(self.grid.row(row).iter().map(|c| c.as_char()));
            out.push('\n');
        }
        out
    }
}

/// Pixel rectangle of the cell at (`col`, `row`)
pub fn cell_rect(col: usize, row: usize, tile_size: i32) -> Rect {
    Rect::new(
        col as i32 * tile_size,
        row as i32 * tile_size,
        tile_size,
        tile_size,
    )
}

/// Degenerate layout: every non-border cell becomes floor
fn open_interior(grid: &mut Grid) {
    for row in 1..grid.height().saturating_sub(1) {
        for col in 1..grid.width().saturating_sub(1) {
            grid.set(col, row, Cell::Floor);
        }
    }
}

/// Randomized DFS from (1,1) over odd lattice cells strictly inside the border
fn carve_passages<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let (width, height) = (grid.width(), grid.height());
    let mut visited = vec![false; width * height];
    let inside = |c: isize, r: isize| {
        c > 0 && c < width as isize - 1 && r > 0 && r < height as isize - 1
    };

    let origin: GridPos = (1, 1);
    grid.set(origin.0, origin.1, Cell::Floor);
    visited[origin.1 * width + origin.0] = true;
    let mut stack = vec![origin];
    let mut candidates: Vec<(GridPos, GridPos)> = Vec::with_capacity(LATTICE_STEPS.len());

    while let Some(&(cx, cy)) = stack.last() {
        candidates.clear();
        for (dx, dy) in LATTICE_STEPS {
            let nx = cx as isize + dx;
            let ny = cy as isize + dy;
            if !inside(nx, ny) {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if visited[ny * width + nx] {
                continue;
            }
            let wall = (
                (cx as isize + dx / 2) as usize,
                (cy as isize + dy / 2) as usize,
            );
            candidates.push(((nx, ny), wall));
        }

        match candidates.choose(rng) {
            Some(&(next, wall)) => {
                for (col, row) in [next, wall] {
                    grid.set(col, row, Cell::Floor);
                    visited[row * width + col] = true;
                }
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }
}

/// Pick start and exit among the floor cells and mark them in the grid
fn place_start_exit<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> (GridPos, GridPos) {
    let mut floor = grid.positions_of(Cell::Floor);
    if floor.is_empty() {
        let center = (grid.width() / 2, grid.height() / 2);
        log::warn!("No floor cells after generation; forcing {:?} open", center);
        grid.set(center.0, center.1, Cell::Floor);
        floor.push(center);
    }

    let start = *floor.choose(rng).unwrap_or(&floor[0]);
    let others: Vec<GridPos> = floor.into_iter().filter(|&c| c != start).collect();

    let exit = if others.is_empty() {
        log::warn!("Only one floor cell; start and exit coincide at {:?}", start);
        start
    } else {
        let (w, h) = (grid.width() as f32, grid.height() as f32);
        let min_dist_sq =
            (w * EXIT_DISTANCE_FRACTION).powi(2) + (h * EXIT_DISTANCE_FRACTION).powi(2);
        let max_attempts = others.len() * 2;

        let mut exit = others[rng.random_range(0..others.len())];
        let mut attempts = 0;
        while grid_dist_sq(start, exit) < min_dist_sq && attempts < max_attempts {
            exit = others[rng.random_range(0..others.len())];
            attempts += 1;
        }
        if grid_dist_sq(start, exit) < min_dist_sq {
            log::warn!(
                "No exit at least {:.1} cells from start after {} attempts; using {:?}",
                min_dist_sq.sqrt(),
                attempts,
                exit
            );
        }
        exit
    };

    grid.set(start.0, start.1, Cell::Start);
    grid.set(exit.0, exit.1, Cell::Exit);
    (start, exit)
}

/// Squared Euclidean distance between two cells
fn grid_dist_sq(a: GridPos, b: GridPos) -> f32 {
    let dx = a.0 as f32 - b.0 as f32;
    let dy = a.1 as f32 - b.1 as f32;
    dx * dx + dy * dy
}

/// Open the second-to-last column/row wherever it doubles the outer wall
fn thin_edge_walls(grid: &mut Grid) {
    let (width, height) = (grid.width(), grid.height());
    if width < 3 || height < 3 {
        return;
    }

    for row in 1..height - 1 {
        if grid.get(width - 2, row) == Cell::Wall && grid.get(width - 1, row) == Cell::Wall {
            grid.set(width - 2, row, Cell::Floor);
        }
    }
    for col in 1..width - 1 {
        if grid.get(col, height - 2) == Cell::Wall && grid.get(col, height - 1) == Cell::Wall {
            grid.set(col, height - 2, Cell::Floor);
        }
    }
}
