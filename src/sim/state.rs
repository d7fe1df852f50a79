//! Game state and level setup
//!
//! Everything a running game owns lives here: the current maze, the player,
//! enemy and projectile lists, the phase machine and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Enemy, Player, Projectile};
use super::maze::Maze;
use crate::settings::GameConfig;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Title,
    /// Active gameplay
    Playing,
    /// Player was caught
    GameOver,
    /// Final level completed
    Win,
}

/// Things that happened during a tick, for logging and UI hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted { level: u32 },
    ShotFired { projectile_id: u32 },
    ProjectileExpired { projectile_id: u32 },
    ProjectileHitWall { projectile_id: u32 },
    EnemyKilled { enemy_id: u32, projectile_id: u32 },
    /// An enemy could not be placed this level
    EnemySpawnSkipped,
    PlayerCaught { enemy_id: u32, level: u32 },
    LevelCompleted { level: u32 },
    RunWon { level: u32 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip, default = "default_rng")]
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Current level (1-based)
    pub level: u32,
    /// Frames simulated while playing
    pub frame: u64,
    /// `None` until the first level starts
    pub maze: Option<Maze>,
    pub player: Option<Player>,
    /// Active enemies (sorted by id)
    pub enemies: Vec<Enemy>,
    /// Active projectiles (sorted by id)
    pub projectiles: Vec<Projectile>,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl GameState {
    /// Create a new game at the title screen
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            level: 1,
            frame: 0,
            maze: None,
            player: None,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin a fresh run from level 1
    pub fn start_run(&mut self) {
        self.level = 1;
        self.reset_level();
    }

    /// Build a new maze for the current level and repopulate it
    pub fn reset_level(&mut self) {
        let config = &self.config;
        let maze = Maze::generate(
            config.grid_width(),
            config.grid_height(),
            config.tile_size,
            &mut self.rng,
        );

        let player = Player::new(maze.start_center(), config.player_size());
        let player_rect = player.rect();
        let player_center = player_rect.center_f32();
        let min_dist_sq = config.enemy_spawn_min_dist_sq();
        let (enemy_count, enemy_size, enemy_speed) =
            (config.enemy_count, config.enemy_size(), config.enemy_speed);

        self.enemies.clear();
        self.projectiles.clear();
        for _ in 0..enemy_count {
            let spawn = maze.index().sample_floor_coordinate(
                &mut self.rng,
                Some(player_rect),
                Some((min_dist_sq, player_center)),
            );
            match spawn {
                Some(at) => {
                    let id = self.next_entity_id();
                    let enemy =
                        Enemy::spawn(id, at.as_vec2(), enemy_size, enemy_speed, &mut self.rng);
                    self.enemies.push(enemy);
                }
                None => {
                    log::warn!("No spawn point for an enemy on level {}", self.level);
                    self.events.push(GameEvent::EnemySpawnSkipped);
                }
            }
        }

        log::info!(
            "Level {}: {}x{} maze, start {:?}, exit {:?}, {} enemies",
            self.level,
            maze.width(),
            maze.height(),
            maze.start_cell(),
            maze.exit_cell(),
            self.enemies.len()
        );

        self.maze = Some(maze);
        self.player = Some(player);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::LevelStarted { level: self.level });
    }

    /// Turn a player shot into a live projectile
    pub fn spawn_projectile(&mut self, origin: Vec2, direction: Vec2) -> u32 {
        let id = self.next_entity_id();
        let projectile = Projectile::new(id, origin, direction, &self.config);
        self.projectiles.push(projectile);
        id
    }

    /// Whether completing the current level ends the run
    pub fn is_final_level(&self) -> bool {
        self.config.final_level.is_some_and(|last| self.level >= last)
    }
}
