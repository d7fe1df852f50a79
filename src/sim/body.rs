//! Kinematic body with axis-separated wall collision
//!
//! Every moving entity is a `KinematicBody`. A frame moves the continuous
//! position by the velocity, then resolves the X axis and the Y axis against
//! the wall rectangles independently. Only the first overlapping wall on each
//! axis is resolved per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// What happens to the axis velocity when the body hits a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Zero the axis velocity (player)
    Stop,
    /// Negate the axis velocity (enemies)
    Bounce,
    /// No response; the body is removed by the encounter pass (projectiles)
    Destroy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// What happened during one `step`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub wall_hit_x: bool,
    pub wall_hit_y: bool,
    pub clamped_x: bool,
    pub clamped_y: bool,
    /// Centre left the open screen interior (Destroy bodies only)
    pub out_of_bounds: bool,
}

impl StepOutcome {
    #[inline]
    pub fn hit_wall(&self) -> bool {
        self.wall_hit_x || self.wall_hit_y
    }
}

/// Continuous position/velocity plus the rounded AABB used for collisions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Centre of the bounding box, sub-pixel
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    /// Rounded bounding box, centred on `pos`
    pub rect: Rect,
    pub policy: CollisionPolicy,
}

impl KinematicBody {
    /// A body of `w` x `h` pixels centred at `pos`, at rest
    pub fn new(pos: Vec2, w: i32, h: i32, policy: CollisionPolicy) -> Self {
        let mut body = Self {
            pos,
            vel: Vec2::ZERO,
            rect: Rect::new(0, 0, w, h),
            policy,
        };
        body.sync_rect();
        body
    }

    /// Recentre the rect on the rounded position
    #[inline]
    pub fn sync_rect(&mut self) {
        self.rect.set_center(self.pos.round().as_ivec2());
    }

    /// Advance one frame against `walls`, keeping the rect inside `screen`
    pub fn step(&mut self, walls: &[Rect], screen: &Rect) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        self.pos += self.vel;

        if self.policy == CollisionPolicy::Destroy {
            self.sync_rect();
            outcome.out_of_bounds = !(self.pos.x > screen.left() as f32
                && self.pos.x < screen.right() as f32
                && self.pos.y > screen.top() as f32
                && self.pos.y < screen.bottom() as f32);
            return outcome;
        }

        self.rect.set_center_x(self.pos.x.round() as i32);
        outcome.wall_hit_x = self.resolve_axis(walls, Axis::X);
        self.rect.set_center_y(self.pos.y.round() as i32);
        outcome.wall_hit_y = self.resolve_axis(walls, Axis::Y);

        let (clamped_x, clamped_y) = self.rect.clamp_within(screen);
        outcome.clamped_x = clamped_x;
        outcome.clamped_y = clamped_y;
        if self.policy == CollisionPolicy::Bounce {
            // a wall hit already flipped the axis this frame
            if clamped_x && !outcome.wall_hit_x {
                self.vel.x = -self.vel.x;
            }
            if clamped_y && !outcome.wall_hit_y {
                self.vel.y = -self.vel.y;
            }
        }

        self.pos = self.rect.center_f32();
        outcome
    }

    /// Push out of the first overlapping wall on one axis
    fn resolve_axis(&mut self, walls: &[Rect], axis: Axis) -> bool {
        let Some(wall) = walls.iter().find(|w| self.rect.overlaps(w)) else {
            return false;
        };

        match axis {
            Axis::X => {
                if self.vel.x > 0.0 {
                    self.rect.set_right(wall.left());
                } else if self.vel.x < 0.0 {
                    self.rect.set_left(wall.right());
                }
                self.vel.x = self.respond(self.vel.x);
                self.pos.x = self.rect.center_x() as f32;
            }
            Axis::Y => {
                if self.vel.y > 0.0 {
                    self.rect.set_bottom(wall.top());
                } else if self.vel.y < 0.0 {
                    self.rect.set_top(wall.bottom());
                }
                self.vel.y = self.respond(self.vel.y);
                self.pos.y = self.rect.center_y() as f32;
            }
        }
        true
    }

    #[inline]
    fn respond(&self, v: f32) -> f32 {
        match self.policy {
            CollisionPolicy::Stop => 0.0,
            CollisionPolicy::Bounce => -v,
            CollisionPolicy::Destroy => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    const SCREEN: Rect = Rect::new(0, 0, 600, 540);

    #[test]
    fn test_stop_flush_against_wall() {
        // 20px body whose right edge is 1px left of the wall
        let wall = Rect::new(100, 0, 30, 200);
        let mut body = KinematicBody::new(Vec2::new(89.0, 50.0), 20, 20, CollisionPolicy::Stop);
        assert_eq!(body.rect.right(), 99);
        body.vel = Vec2::new(5.0, 0.0);

        let outcome = body.step(&[wall], &SCREEN);
        assert!(outcome.wall_hit_x);
        assert_eq!(body.rect.right(), wall.left());
        assert_eq!(body.vel.x, 0.0);
        assert_eq!(body.pos, Vec2::new(90.0, 50.0));
    }

    #[test]
    fn test_bounce_flips_only_hit_axis() {
        let wall = Rect::new(100, 0, 30, 200);
        let mut body = KinematicBody::new(Vec2::new(90.0, 50.0), 18, 18, CollisionPolicy::Bounce);
        body.vel = Vec2::new(2.0, 2.0);

        let outcome = body.step(&[wall], &SCREEN);
        assert!(outcome.hit_wall());
        assert!(outcome.wall_hit_x);
        assert!(!outcome.wall_hit_y);
        assert_eq!(body.vel, Vec2::new(-2.0, 2.0));
        assert_eq!(body.rect.right(), 100);
        assert!(!body.rect.overlaps(&wall));
    }

    #[test]
    fn test_first_wall_wins_per_axis() {
        // two overlapping walls; only the first in order is resolved
        let first = Rect::new(100, 0, 30, 200);
        let second = Rect::new(95, 0, 30, 200);
        let mut body = KinematicBody::new(Vec2::new(88.0, 50.0), 20, 20, CollisionPolicy::Stop);
        body.vel = Vec2::new(5.0, 0.0);
        body.step(&[first, second], &SCREEN);
        assert_eq!(body.rect.right(), 100);
    }

    #[test]
    fn test_bounce_off_screen_edge_without_wall() {
        let mut body = KinematicBody::new(Vec2::new(10.0, 100.0), 18, 18, CollisionPolicy::Bounce);
        body.vel = Vec2::new(-2.0, 0.0);
        let outcome = body.step(&[], &SCREEN);
        assert!(outcome.clamped_x);
        assert_eq!(body.rect.left(), 0);
        assert_eq!(body.vel.x, 2.0);
    }

    #[test]
    fn test_no_double_flip_when_wall_and_edge_same_frame() {
        // wall off-screen: resolving it still leaves the body past x=0
        let wall = Rect::new(-50, 0, 45, 200);
        let mut body = KinematicBody::new(Vec2::new(-2.0, 100.0), 18, 18, CollisionPolicy::Bounce);
        body.vel = Vec2::new(-2.0, 0.0);
        let outcome = body.step(&[wall], &SCREEN);
        assert!(outcome.wall_hit_x);
        assert!(outcome.clamped_x);
        assert_eq!(body.rect.left(), 0);
        assert_eq!(body.vel.x, 2.0);
    }

    #[test]
    fn test_stop_screen_clamp_keeps_velocity() {
        let mut body = KinematicBody::new(Vec2::new(595.0, 100.0), 20, 20, CollisionPolicy::Stop);
        body.vel = Vec2::new(3.0, 0.0);
        let outcome = body.step(&[], &SCREEN);
        assert!(outcome.clamped_x);
        assert_eq!(body.rect.right(), 600);
        assert_eq!(body.vel.x, 3.0);
    }

    #[test]
    fn test_destroy_moves_continuously() {
        let mut body =
            KinematicBody::new(Vec2::new(100.25, 100.0), 10, 10, CollisionPolicy::Destroy);
        body.vel = Vec2::new(8.0, 0.0);
        for i in 1..=5 {
            let outcome = body.step(&[], &SCREEN);
            assert!(!outcome.out_of_bounds);
            assert_eq!(body.pos.x, 100.25 + 8.0 * i as f32);
        }
        assert_eq!(body.rect.center(), IVec2::new(140, 100));
    }

    #[test]
    fn test_destroy_passes_through_walls() {
        let wall = Rect::new(100, 0, 30, 200);
        let mut body = KinematicBody::new(Vec2::new(95.0, 50.0), 10, 10, CollisionPolicy::Destroy);
        body.vel = Vec2::new(8.0, 0.0);
        let outcome = body.step(&[wall], &SCREEN);
        assert!(!outcome.hit_wall());
        assert!(body.rect.overlaps(&wall));
        assert_eq!(body.vel.x, 8.0);
    }

    #[test]
    fn test_rect_tracks_rounded_position() {
        let mut body = KinematicBody::new(Vec2::new(50.0, 50.0), 21, 21, CollisionPolicy::Stop);
        body.vel = Vec2::new(2.6, -1.2);
        let outcome = body.step(&[], &SCREEN);
        assert!(!outcome.hit_wall());
        assert_eq!(body.rect.center(), body.pos.round().as_ivec2());
    }

    #[test]
    fn test_destroy_edge_counts_as_outside() {
        let mut body =
            KinematicBody::new(Vec2::new(592.0, 100.0), 10, 10, CollisionPolicy::Destroy);
        body.vel = Vec2::new(8.0, 0.0);
        assert!(body.step(&[], &SCREEN).out_of_bounds);
    }
}
