//! Fixed-rate simulation tick
//!
//! One call advances the game by one frame. Speeds are pixels per frame, so
//! the host must call `tick` at the configured frame rate.

use super::collision::{player_reached_exit, resolve_encounters};
use super::entities::FrameInput;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Movement/sprint/shoot intent
    pub frame: FrameInput,
    /// Confirm key (start game, leave end screens)
    pub confirm: bool,
}

/// Advance the game state by one frame; `now_ms` is a monotonic clock
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    state.events.clear();

    match state.phase {
        GamePhase::Title => {
            if input.confirm {
                log::info!("Starting new run (seed {})", state.seed);
                state.start_run();
            }
        }
        GamePhase::GameOver | GamePhase::Win => {
            if input.confirm {
                state.phase = GamePhase::Title;
            }
        }
        GamePhase::Playing => step_playing(state, &input.frame, now_ms),
    }
}

fn step_playing(state: &mut GameState, input: &FrameInput, now_ms: u64) {
    if state.maze.is_none() || state.player.is_none() {
        log::warn!("Playing without a level; building one");
        state.reset_level();
        return;
    }
    let (Some(maze), Some(player)) = (state.maze.as_ref(), state.player.as_mut()) else {
        return;
    };
    state.frame += 1;

    let screen = state.config.screen_rect();
    let walls = maze.wall_rects();

    // Player intent, then an optional shot from the pre-move position
    player.apply_input(input, &state.config);
    let shot = if input.shoot {
        player.try_shoot(now_ms, &state.config)
    } else {
        None
    };

    // Move everything before any encounter test
    player.update(walls, &screen);
    for enemy in &mut state.enemies {
        if enemy.update(walls, &screen).hit_wall() {
            log::trace!("Enemy {} bounced to {:?}", enemy.id, enemy.body.vel);
        }
    }
    let player_rect = player.rect();
    let exit_rect = maze.exit_rect();

    if let Some(shot) = shot {
        let projectile_id = state.spawn_projectile(shot.origin, shot.direction);
        state.events.push(GameEvent::ShotFired { projectile_id });
    }
    let events = &mut state.events;
    state.projectiles.retain_mut(|p| {
        let alive = p.update(&screen);
        if !alive {
            events.push(GameEvent::ProjectileExpired { projectile_id: p.id });
        }
        alive
    });

    let Some(maze) = state.maze.as_ref() else {
        return;
    };
    let report = resolve_encounters(
        player_rect,
        &mut state.enemies,
        &mut state.projectiles,
        maze.wall_rects(),
    );
    state.events.extend(
        report
            .wall_hits
            .iter()
            .map(|&projectile_id| GameEvent::ProjectileHitWall { projectile_id }),
    );
    for kill in &report.kills {
        log::debug!("Enemy {} destroyed by projectile {}", kill.enemy_id, kill.projectile_id);
        state.events.push(GameEvent::EnemyKilled {
            enemy_id: kill.enemy_id,
            projectile_id: kill.projectile_id,
        });
    }

    if let Some(enemy_id) = report.caught_by {
        log::info!("Caught by enemy {} on level {}", enemy_id, state.level);
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::PlayerCaught {
            enemy_id,
            level: state.level,
        });
        return;
    }

    if player_reached_exit(player_rect, exit_rect) {
        state.events.push(GameEvent::LevelCompleted { level: state.level });
        if state.is_final_level() {
            log::info!("Final level {} cleared", state.level);
            state.phase = GamePhase::Win;
            state.events.push(GameEvent::RunWon { level: state.level });
        } else {
            state.level += 1;
            log::info!("Exit reached, advancing to level {}", state.level);
            state.reset_level();
        }
    }
}
