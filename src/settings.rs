//! Game configuration
//!
//! Every tunable the simulation reads lives here. Loaded from JSON by the host;
//! missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};
use crate::sim::Rect;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen / grid ===
    /// Screen width in pixels
    pub screen_width: i32,
    /// Screen height in pixels
    pub screen_height: i32,
    /// Maze cell side in pixels
    pub tile_size: i32,
    /// Frame rate the speeds are tuned for
    pub fps: u32,

    // === Player ===
    pub player_size_factor: f32,
    /// Pixels per frame
    pub player_speed: f32,
    /// Pixels per frame while sprint is held
    pub player_sprint_speed: f32,
    /// Minimum interval between shots (ms)
    pub player_shoot_delay_ms: u64,

    // === Enemies ===
    pub enemy_size_factor: f32,
    /// Pixels per frame on each axis
    pub enemy_speed: f32,
    /// Enemies spawned per level
    pub enemy_count: u32,
    /// Minimum spawn distance from the player start, in tiles
    pub enemy_spawn_min_tiles: f32,

    // === Projectiles ===
    pub projectile_radius: i32,
    /// Pixels per frame
    pub projectile_speed: f32,

    // === Progression ===
    /// Completing this level wins the run. `None` plays forever.
    pub final_level: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tile_size: TILE_SIZE,
            fps: FPS,

            player_size_factor: PLAYER_SIZE_FACTOR,
            player_speed: PLAYER_SPEED,
            player_sprint_speed: PLAYER_SPRINT_SPEED,
            player_shoot_delay_ms: PLAYER_SHOOT_DELAY_MS,

            enemy_size_factor: ENEMY_SIZE_FACTOR,
            enemy_speed: ENEMY_SPEED,
            enemy_count: NUM_ENEMIES,
            enemy_spawn_min_tiles: ENEMY_SPAWN_MIN_TILES,

            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,

            final_level: None,
        }
    }
}

impl GameConfig {
    /// Grid columns (remainder pixels are unused margin)
    pub fn grid_width(&self) -> usize {
        (self.screen_width / self.tile_size.max(1)).max(0) as usize
    }

    /// Grid rows (remainder pixels are unused margin)
    pub fn grid_height(&self) -> usize {
        (self.screen_height / self.tile_size.max(1)).max(0) as usize
    }

    /// Player side length in pixels
    pub fn player_size(&self) -> i32 {
        (self.tile_size as f32 * self.player_size_factor) as i32
    }

    /// Enemy side length in pixels
    pub fn enemy_size(&self) -> i32 {
        (self.tile_size as f32 * self.enemy_size_factor) as i32
    }

    /// The whole screen as a rectangle (bounds for clamping)
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }

    /// Squared pixel distance enemies must keep from the player start
    pub fn enemy_spawn_min_dist_sq(&self) -> f32 {
        let d = self.tile_size as f32 * self.enemy_spawn_min_tiles;
        d * d
    }

    /// Check that the values describe a playable game.
    ///
    /// A projectile faster than one tile per frame can tunnel through walls;
    /// that is allowed but logged.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tile_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if self.grid_width() == 0 || self.grid_height() == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen {}x{} holds no {}px tile",
                self.screen_width, self.screen_height, self.tile_size
            )));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be positive".into()));
        }
        if self.player_size() <= 0 || self.enemy_size() <= 0 {
            return Err(ConfigError::Invalid(
                "player and enemy size factors must yield at least one pixel".into(),
            ));
        }
        if self.projectile_radius <= 0 {
            return Err(ConfigError::Invalid(
                "projectile_radius must be positive".into(),
            ));
        }
        let speeds = [
            ("player_speed", self.player_speed),
            ("player_sprint_speed", self.player_sprint_speed),
            ("enemy_speed", self.enemy_speed),
            ("projectile_speed", self.projectile_speed),
        ];
        for (name, speed) in speeds {
            if !speed.is_finite() || speed < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {speed}"
                )));
            }
        }
        if self.grid_width() < 3 || self.grid_height() < 3 {
            log::warn!(
                "Grid {}x{} is too small for a maze interior; a degenerate level will be used",
                self.grid_width(),
                self.grid_height()
            );
        }
        if self.projectile_speed > self.tile_size as f32 {
            log::warn!(
                "projectile_speed {} exceeds tile_size {}: projectiles may pass through walls",
                self.projectile_speed,
                self.tile_size
            );
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
