//! Player, enemy and projectile controllers
//!
//! Each entity wraps a [`KinematicBody`] and decides only how its velocity is
//! set; the shared body does the moving and wall response.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{CollisionPolicy, KinematicBody, StepOutcome};
use super::rect::Rect;
use crate::settings::GameConfig;

/// Movement intent for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub sprint: bool,
    pub shoot: bool,
}

/// A shot the player wants fired; the owner of the projectile list spawns it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotRequest {
    pub origin: Vec2,
    /// Unit vector
    pub direction: Vec2,
}

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: KinematicBody,
    pub size: i32,
    pub sprinting: bool,
    /// Fire direction while standing still (unit vector)
    pub last_move_dir: Vec2,
    pub last_shot_ms: Option<u64>,
}

impl Player {
    /// A player of `size` pixels centred at `center`, facing right
    pub fn new(center: Vec2, size: i32) -> Self {
        Self {
            body: KinematicBody::new(center, size, size, CollisionPolicy::Stop),
            size,
            sprinting: false,
            last_move_dir: Vec2::X,
            last_shot_ms: None,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    /// Rebuild velocity from this frame's input (no inertia)
    pub fn apply_input(&mut self, input: &FrameInput, config: &GameConfig) {
        self.sprinting = input.sprint;
        let speed = if self.sprinting {
            config.player_sprint_speed
        } else {
            config.player_speed
        };

        let mut vel = Vec2::ZERO;
        if input.move_left {
            vel.x = -speed;
        }
        if input.move_right {
            vel.x = speed;
        }
        if input.move_up {
            vel.y = -speed;
        }
        if input.move_down {
            vel.y = speed;
        }

        // diagonal moves are no faster than straight ones
        if vel.x != 0.0 && vel.y != 0.0 {
            vel = vel.normalize() * speed;
        }
        if vel.length_squared() > 0.0 {
            self.last_move_dir = vel.normalize();
        }
        self.body.vel = vel;
    }

    /// Fire if the shot delay has elapsed since the previous shot
    pub fn try_shoot(&mut self, now_ms: u64, config: &GameConfig) -> Option<ShotRequest> {
        let cooling_down = self
            .last_shot_ms
            .is_some_and(|last| now_ms.saturating_sub(last) <= config.player_shoot_delay_ms);
        if cooling_down {
            return None;
        }
        self.last_shot_ms = Some(now_ms);

        let offset = self.size as f32 / 2.0 + config.projectile_radius as f32;
        Some(ShotRequest {
            origin: self.body.pos + self.last_move_dir * offset,
            direction: self.last_move_dir,
        })
    }

    pub fn update(&mut self, walls: &[Rect], screen: &Rect) -> StepOutcome {
        self.body.step(walls, screen)
    }
}

/// A bouncing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub body: KinematicBody,
}

impl Enemy {
    /// Spawn at `center` heading diagonally in one of four random directions
    pub fn spawn<R: Rng + ?Sized>(
        id: u32,
        center: Vec2,
        size: i32,
        speed: f32,
        rng: &mut R,
    ) -> Self {
        let mut body = KinematicBody::new(center, size, size, CollisionPolicy::Bounce);
        let sx = if rng.random_bool(0.5) { speed } else { -speed };
        let sy = if rng.random_bool(0.5) { speed } else { -speed };
        body.vel = Vec2::new(sx, sy);
        Self { id, body }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    pub fn update(&mut self, walls: &[Rect], screen: &Rect) -> StepOutcome {
        self.body.step(walls, screen)
    }
}

/// A straight-flying projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub body: KinematicBody,
    pub radius: i32,
}

impl Projectile {
    /// Launch from `origin` along `direction` (a zero direction fires right)
    pub fn new(id: u32, origin: Vec2, direction: Vec2, config: &GameConfig) -> Self {
        let radius = config.projectile_radius;
        let mut body = KinematicBody::new(origin, radius * 2, radius * 2, CollisionPolicy::Destroy);
        body.vel = direction.try_normalize().unwrap_or(Vec2::X) * config.projectile_speed;
        Self { id, body, radius }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    /// Move one frame. Returns false once the centre has left the screen.
    pub fn update(&mut self, screen: &Rect) -> bool {
        !self.body.step(&[], screen).out_of_bounds
    }
}
