//! Integer axis-aligned rectangle
//!
//! All collision and rendering geometry uses whole-pixel rectangles. Positions
//! are kept in floating point by the bodies and rounded into a `Rect` each frame.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel space (`x`, `y` is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centred on `center`
    pub fn from_center(center: IVec2, w: i32, h: i32) -> Self {
        let mut rect = Self::new(0, 0, w, h);
        rect.set_center(center);
        rect
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    #[inline]
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    #[inline]
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    #[inline]
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Horizontal centre (floors for odd widths)
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.center_x(), self.center_y())
    }

    #[inline]
    pub fn set_center_x(&mut self, cx: i32) {
        self.x = cx - self.w / 2;
    }

    #[inline]
    pub fn set_center_y(&mut self, cy: i32) {
        self.y = cy - self.h / 2;
    }

    #[inline]
    pub fn set_center(&mut self, center: IVec2) {
        self.set_center_x(center.x);
        self.set_center_y(center.y);
    }

    /// Centre as a float vector
    #[inline]
    pub fn center_f32(&self) -> Vec2 {
        self.center().as_vec2()
    }

    /// AABB overlap test. Touching edges do not overlap; empty rects never overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Point containment, half-open: left/top edges inside, right/bottom outside
    #[inline]
    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Grow (or shrink, with negative values) around the centre
    pub fn inflate(&self, dw: i32, dh: i32) -> Rect {
        Rect::new(self.x - dw / 2, self.y - dh / 2, self.w + dw, self.h + dh)
    }

    /// Push this rect inside `bounds` edge by edge.
    ///
    /// Returns whether each axis was clamped.
    pub fn clamp_within(&mut self, bounds: &Rect) -> (bool, bool) {
        let mut clamped_x = false;
        let mut clamped_y = false;
        if self.left() < bounds.left() {
            self.set_left(bounds.left());
            clamped_x = true;
        }
        if self.right() > bounds.right() {
            self.set_right(bounds.right());
            clamped_x = true;
        }
        if self.top() < bounds.top() {
            self.set_top(bounds.top());
            clamped_y = true;
        }
        if self.bottom() > bounds.bottom() {
            self.set_bottom(bounds.bottom());
            clamped_y = true;
        }
        (clamped_x, clamped_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 30, 30);
        let b = Rect::new(30, 0, 30, 30);
        assert!(!a.overlaps(&b));
        let c = Rect::new(29, 29, 30, 30);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let a = Rect::new(0, 0, 30, 30);
        assert!(!a.overlaps(&Rect::new(5, 5, 0, 10)));
    }

    #[test]
    fn test_odd_width_center_roundtrip() {
        let mut r = Rect::new(0, 0, 21, 21);
        r.set_center(IVec2::new(45, 100));
        assert_eq!(r.x, 35);
        assert_eq!(r.center(), IVec2::new(45, 100));
    }

    #[test]
    fn test_contains_point_half_open() {
        let r = Rect::new(10, 10, 10, 10);
        assert!(r.contains_point(IVec2::new(10, 10)));
        assert!(!r.contains_point(IVec2::new(20, 15)));
    }

    #[test]
    fn test_inflate_keeps_center() {
        let r = Rect::new(30, 60, 30, 30);
        let marker = r.inflate(-6, -6);
        assert_eq!(marker, Rect::new(33, 63, 24, 24));
        assert_eq!(marker.center(), r.center());
    }

    #[test]
    fn test_clamp_within_reports_axes() {
        let bounds = Rect::new(0, 0, 100, 100);
        let mut r = Rect::new(95, -3, 10, 10);
        assert_eq!(r.clamp_within(&bounds), (true, true));
        assert_eq!(r, Rect::new(90, 0, 10, 10));
        assert_eq!(r.clamp_within(&bounds), (false, false));
    }
}
