//! Maze Runner - A top-down maze-chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze generation, physics, encounters, game state)
//! - `renderer`: Scene description and tessellation for an external renderer
//! - `settings`: Data-driven game configuration
//! - `error`: Configuration errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, ConfigResult};
pub use settings::GameConfig;

/// Default configuration constants
pub mod consts {
    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: i32 = 600;
    pub const SCREEN_HEIGHT: i32 = 540;

    /// Side of one maze cell in pixels
    pub const TILE_SIZE: i32 = 30;

    /// Target frame rate. All speeds are pixels per frame at this rate.
    pub const FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SIZE_FACTOR: f32 = 0.7;
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_SPRINT_SPEED: f32 = 5.0;
    /// Minimum interval between shots (ms)
    pub const PLAYER_SHOOT_DELAY_MS: u64 = 200;

    /// Enemy defaults
    pub const ENEMY_SIZE_FACTOR: f32 = 0.6;
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const NUM_ENEMIES: u32 = 5;
    /// Enemies never spawn closer than this many tiles to the player start
    pub const ENEMY_SPAWN_MIN_TILES: f32 = 4.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: i32 = 5;
    pub const PROJECTILE_SPEED: f32 = 8.0;

    /// Exit placement: fraction of each grid dimension the exit should be from the start
    pub const EXIT_DISTANCE_FRACTION: f32 = 0.3;
}

/// Frame period in milliseconds for a given frame rate
#[inline]
pub fn frame_period_ms(fps: u32) -> u64 {
    1000 / u64::from(fps.max(1))
}
