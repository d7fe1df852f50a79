//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Simple 2D vertex with position (pixels) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    /// Bytes per vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` within a vertex
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// View a vertex slice as raw bytes for upload
#[inline]
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    const fn rgb(r: u8, g: u8, b: u8) -> Color {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const WHITE: Color = rgb(255, 255, 255);
    pub const FLOOR: Color = rgb(40, 40, 40);
    pub const WALL: Color = rgb(100, 100, 150);
    pub const WALL_BORDER: Color = rgb(20, 20, 40);
    pub const PLAYER: Color = rgb(255, 100, 100);
    pub const PLAYER_BORDER: Color = rgb(100, 0, 0);
    pub const PLAYER_SPRINT: Color = rgb(255, 150, 150);
    pub const START: Color = rgb(100, 255, 100);
    pub const EXIT: Color = rgb(100, 100, 255);
    pub const ENEMY: Color = rgb(255, 255, 0);
    pub const ENEMY_BORDER: Color = rgb(150, 150, 0);
    pub const PROJECTILE: Color = rgb(120, 130, 119);
    /// Dimming layer behind end-screen text
    pub const OVERLAY: Color = [0.0, 0.0, 0.0, 180.0 / 255.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
        let verts = [Vertex::new(1.0, 2.0, colors::WHITE); 3];
        assert_eq!(as_bytes(&verts).len(), 3 * Vertex::STRIDE);
    }
}
