//! Shape generation for 2D primitives
//!
//! Triangulates draw commands into a flat triangle list. Text is skipped; the
//! host draws it with its own fonts.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::scene::DrawCommand;
use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Segments used for full circles
pub const CIRCLE_SEGMENTS: u32 = 24;
/// Segments used for each rounded corner
pub const CORNER_SEGMENTS: u32 = 4;

/// Triangulate every non-text command, in order
pub fn tessellate(cmds: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for cmd in cmds {
        match cmd {
            DrawCommand::FillRect { rect, color } => {
                vertices.extend(rect_fill(rect, *color));
            }
            DrawCommand::OutlineRect {
                rect,
                thickness,
                color,
            } => vertices.extend(rect_outline(rect, *thickness, *color)),
            DrawCommand::RoundedRect {
                rect,
                radius,
                color,
            } => vertices.extend(rounded_rect(rect, *radius as f32, *color)),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCommand::Text { .. } => {}
        }
    }
    vertices
}

/// Two triangles covering an axis-aligned quad
fn quad(x0: f32, y0: f32, x1: f32, y1: f32, color: Color) -> [Vertex; 6] {
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled rectangle
pub fn rect_fill(rect: &Rect, color: Color) -> Vec<Vertex> {
    if rect.w <= 0 || rect.h <= 0 {
        return Vec::new();
    }
    quad(
        rect.left() as f32,
        rect.top() as f32,
        rect.right() as f32,
        rect.bottom() as f32,
        color,
    )
    .to_vec()
}

/// Generate vertices for a border drawn inside the rectangle
pub fn rect_outline(rect: &Rect, thickness: i32, color: Color) -> Vec<Vertex> {
    let t = thickness.min(rect.w / 2).min(rect.h / 2);
    if t <= 0 {
        return Vec::new();
    }
    let (l, r, top, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    let bands = [
        Rect::new(l, top, rect.w, t),
        Rect::new(l, b - t, rect.w, t),
        Rect::new(l, top + t, t, rect.h - 2 * t),
        Rect::new(r - t, top + t, t, rect.h - 2 * t),
    ];
    bands.iter().flat_map(|band| rect_fill(band, color)).collect()
}

/// Generate vertices for a rectangle with rounded corners
pub fn rounded_rect(rect: &Rect, radius: f32, color: Color) -> Vec<Vertex> {
    let radius = radius.min(rect.w as f32 / 2.0).min(rect.h as f32 / 2.0);
    if radius <= 0.0 {
        return rect_fill(rect, color);
    }

    let (l, r) = (rect.left() as f32, rect.right() as f32);
    let (t, b) = (rect.top() as f32, rect.bottom() as f32);
    let mut vertices = Vec::with_capacity(18 + 4 * CORNER_SEGMENTS as usize * 3);

    // Cross: full-height middle band plus the left and right bands
    vertices.extend(quad(l + radius, t, r - radius, b, color));
    vertices.extend(quad(l, t + radius, l + radius, b - radius, color));
    vertices.extend(quad(r - radius, t + radius, r, b - radius, color));

    // Quarter-circle fans in each corner
    let corners = [
        (Vec2::new(r - radius, t + radius), -FRAC_PI_2),
        (Vec2::new(r - radius, b - radius), 0.0),
        (Vec2::new(l + radius, b - radius), FRAC_PI_2),
        (Vec2::new(l + radius, t + radius), PI),
    ];
    for (center, start) in corners {
        for i in 0..CORNER_SEGMENTS {
            let a1 = start + (i as f32 / CORNER_SEGMENTS as f32) * FRAC_PI_2;
            let a2 = start + ((i + 1) as f32 / CORNER_SEGMENTS as f32) * FRAC_PI_2;
            vertices.push(Vertex::new(center.x, center.y, color));
            vertices.push(Vertex::new(
                center.x + radius * a1.cos(),
                center.y + radius * a1.sin(),
                color,
            ));
            vertices.push(Vertex::new(
                center.x + radius * a2.cos(),
                center.y + radius * a2.sin(),
                color,
            ));
        }
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::scene::TextAlign;
    use crate::renderer::vertex::colors;

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for v in vertices {
            let p = Vec2::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    #[test]
    fn test_rect_fill_is_two_triangles() {
        let v = rect_fill(&Rect::new(30, 60, 30, 30), colors::WALL);
        assert_eq!(v.len(), 6);
        assert_eq!(bounds(&v), (Vec2::new(30.0, 60.0), Vec2::new(60.0, 90.0)));
    }

    #[test]
    fn test_outline_stays_inside() {
        let v = rect_outline(&Rect::new(0, 0, 30, 30), 2, colors::WALL_BORDER);
        assert_eq!(v.len(), 24);
        assert_eq!(bounds(&v), (Vec2::ZERO, Vec2::new(30.0, 30.0)));
    }

    #[test]
    fn test_rounded_rect_within_bounds() {
        let rect = Rect::new(10, 10, 21, 21);
        let v = rounded_rect(&rect, 3.0, colors::PLAYER);
        assert_eq!(v.len(), 18 + 4 * CORNER_SEGMENTS as usize * 3);
        let (min, max) = bounds(&v);
        assert!(min.x >= 10.0 - 1e-4 && min.y >= 10.0 - 1e-4);
        assert!(max.x <= 31.0 + 1e-4 && max.y <= 31.0 + 1e-4);
    }

    #[test]
    fn test_circle_segments() {
        let v = circle(Vec2::new(50.0, 50.0), 5.0, colors::PROJECTILE, 8);
        assert_eq!(v.len(), 24);
        let (min, max) = bounds(&v);
        assert!((min.x - 45.0).abs() < 1e-4 && (max.x - 55.0).abs() < 1e-4);
    }

    #[test]
    fn test_tessellate_skips_text() {
        let cmds = [
            DrawCommand::FillRect {
                rect: Rect::new(0, 0, 10, 10),
                color: colors::FLOOR,
            },
            DrawCommand::Text {
                text: "Level: 1".into(),
                size: 24,
                color: colors::WHITE,
                anchor: Vec2::new(10.0, 10.0),
                align: TextAlign::TopLeft,
            },
        ];
        assert_eq!(tessellate(&cmds).len(), 6);
    }
}
