//! Collision and spawn geometry derived from a maze grid

use glam::{IVec2, Vec2};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::maze::{Cell, Grid, cell_rect};
use super::rect::Rect;

/// Wall rectangles, exit rectangle and walkable cell centres for one maze
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpatialIndex {
    wall_rects: Vec<Rect>,
    exit_rect: Option<Rect>,
    floor_coords: Vec<IVec2>,
}

impl SpatialIndex {
    /// Map every cell of `grid` to pixel geometry (row-major order)
    pub fn build(grid: &Grid, tile_size: i32) -> Self {
        let mut index = Self::default();
        for ((col, row), cell) in grid.iter() {
            let rect = cell_rect(col, row, tile_size);
            match cell {
                Cell::Wall => index.wall_rects.push(rect),
                Cell::Exit => {
                    index.exit_rect = Some(rect);
                    index.floor_coords.push(rect.center());
                }
                Cell::Start | Cell::Floor => index.floor_coords.push(rect.center()),
            }
        }
        index
    }

    #[inline]
    pub fn wall_rects(&self) -> &[Rect] {
        &self.wall_rects
    }

    #[inline]
    pub fn exit_rect(&self) -> Option<Rect> {
        self.exit_rect
    }

    #[inline]
    pub fn floor_coords(&self) -> &[IVec2] {
        &self.floor_coords
    }

    /// Pick a random walkable cell centre.
    ///
    /// Coordinates inside `exclude` are never returned. `min_distance` is a
    /// (squared distance, source point) pair; it is dropped if nothing
    /// satisfies it. Returns `None` only when every coordinate is excluded.
    pub fn sample_floor_coordinate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        exclude: Option<Rect>,
        min_distance: Option<(f32, Vec2)>,
    ) -> Option<IVec2> {
        if self.floor_coords.is_empty() {
            log::warn!("No floor coordinates to sample from");
            return None;
        }

        let allowed: Vec<IVec2> = self
            .floor_coords
            .iter()
            .copied()
            .filter(|&p| exclude.is_none_or(|r| !r.contains_point(p)))
            .collect();

        if let Some((min_dist_sq, source)) = min_distance {
            let far: Vec<IVec2> = allowed
                .iter()
                .copied()
                .filter(|p| p.as_vec2().distance_squared(source) >= min_dist_sq)
                .collect();
            if let Some(&p) = far.choose(rng) {
                return Some(p);
            }
            log::warn!(
                "No floor coordinate at least {:.0}px from {:?}; ignoring distance",
                min_dist_sq.sqrt(),
                source
            );
        }

        let picked = allowed.choose(rng).copied();
        if picked.is_none() {
            log::warn!("Every floor coordinate is excluded");
        }
        picked
    }
}
