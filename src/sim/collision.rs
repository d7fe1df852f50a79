//! Cross-entity encounters
//!
//! Runs once per frame after every body has moved. The checks run in a fixed
//! order: projectile vs wall, projectile vs enemy, player vs enemy. A
//! projectile removed by an earlier check cannot take part in a later one.
//! All tests are snapshot AABB overlaps, so a projectile moving more than a
//! wall's thickness per frame can pass through it.

use super::entities::{Enemy, Projectile};
use super::rect::Rect;

/// A projectile that destroyed an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kill {
    pub enemy_id: u32,
    pub projectile_id: u32,
}

/// Result of one encounter pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncounterReport {
    /// Projectiles removed on wall contact
    pub wall_hits: Vec<u32>,
    /// Enemies removed with the projectile that hit them
    pub kills: Vec<Kill>,
    /// First surviving enemy touching the player
    pub caught_by: Option<u32>,
}

impl EncounterReport {
    #[inline]
    pub fn player_caught(&self) -> bool {
        self.caught_by.is_some()
    }
}

/// Resolve all encounters for this frame, removing spent projectiles and killed enemies
pub fn resolve_encounters(
    player_rect: Rect,
    enemies: &mut Vec<Enemy>,
    projectiles: &mut Vec<Projectile>,
    walls: &[Rect],
) -> EncounterReport {
    let mut report = EncounterReport::default();

    // 1. projectile vs wall
    projectiles.retain(|p| {
        let rect = p.rect();
        let hit = walls.iter().any(|w| rect.overlaps(w));
        if hit {
            report.wall_hits.push(p.id);
        }
        !hit
    });

    // 2. projectile vs enemy: one projectile per enemy, consumed immediately
    enemies.retain(|enemy| {
        let rect = enemy.rect();
        match projectiles.iter().position(|p| p.rect().overlaps(&rect)) {
            Some(i) => {
                let projectile = projectiles.remove(i);
                report.kills.push(Kill {
                    enemy_id: enemy.id,
                    projectile_id: projectile.id,
                });
                false
            }
            None => true,
        }
    });

    // 3. player vs enemy
    report.caught_by = enemies
        .iter()
        .find(|e| e.rect().overlaps(&player_rect))
        .map(|e| e.id);

    report
}

/// Whether the player's box touches the exit tile
#[inline]
pub fn player_reached_exit(player_rect: Rect, exit_rect: Option<Rect>) -> bool {
    exit_rect.is_some_and(|exit| player_rect.overlaps(&exit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::body::{CollisionPolicy, KinematicBody};
    use glam::Vec2;

    fn enemy(id: u32, x: f32, y: f32) -> Enemy {
        Enemy {
            id,
            body: KinematicBody::new(Vec2::new(x, y), 18, 18, CollisionPolicy::Bounce),
        }
    }

    fn projectile(id: u32, x: f32, y: f32) -> Projectile {
        Projectile::new(id, Vec2::new(x, y), Vec2::X, &GameConfig::default())
    }

    const FAR_PLAYER: Rect = Rect::new(500, 500, 21, 21);

    #[test]
    fn test_projectile_kills_enemy() {
        let mut enemies = vec![enemy(1, 100.0, 100.0), enemy(2, 300.0, 100.0)];
        let mut projectiles = vec![projectile(10, 105.0, 100.0)];

        let report = resolve_encounters(FAR_PLAYER, &mut enemies, &mut projectiles, &[]);
        assert_eq!(
            report.kills,
            vec![Kill {
                enemy_id: 1,
                projectile_id: 10
            }]
        );
        assert!(projectiles.is_empty());
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].id, 2);
        assert!(!report.player_caught());
    }

    #[test]
    fn test_one_projectile_kills_at_most_one_enemy() {
        // two enemies stacked on the same projectile
        let mut enemies = vec![enemy(1, 100.0, 100.0), enemy(2, 102.0, 100.0)];
        let mut projectiles = vec![projectile(10, 101.0, 100.0)];

        let report = resolve_encounters(FAR_PLAYER, &mut enemies, &mut projectiles, &[]);
        assert_eq!(report.kills.len(), 1);
        assert_eq!(report.kills[0].enemy_id, 1);
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].id, 2);
    }

    #[test]
    fn test_wall_hit_consumes_projectile_before_enemy() {
        let wall = Rect::new(90, 90, 30, 30);
        let mut enemies = vec![enemy(1, 100.0, 100.0)];
        let mut projectiles = vec![projectile(10, 100.0, 100.0)];

        let report = resolve_encounters(FAR_PLAYER, &mut enemies, &mut projectiles, &[wall]);
        assert_eq!(report.wall_hits, vec![10]);
        assert!(report.kills.is_empty());
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_player_caught_by_first_enemy() {
        let player = Rect::from_center(glam::IVec2::new(100, 100), 21, 21);
        let mut enemies = vec![
            enemy(1, 300.0, 300.0),
            enemy(2, 110.0, 100.0),
            enemy(3, 95.0, 100.0),
        ];
        let mut projectiles = Vec::new();

        let report = resolve_encounters(player, &mut enemies, &mut projectiles, &[]);
        assert_eq!(report.caught_by, Some(2));
    }

    #[test]
    fn test_killed_enemy_cannot_catch_player() {
        let player = Rect::from_center(glam::IVec2::new(100, 100), 21, 21);
        let mut enemies = vec![enemy(1, 110.0, 100.0)];
        let mut projectiles = vec![projectile(10, 115.0, 100.0)];

        let report = resolve_encounters(player, &mut enemies, &mut projectiles, &[]);
        assert_eq!(report.kills.len(), 1);
        assert!(!report.player_caught());
    }

    #[test]
    fn test_player_reached_exit() {
        let exit = Rect::new(300, 300, 30, 30);
        let on_exit = Rect::from_center(glam::IVec2::new(295, 310), 21, 21);
        let beside = Rect::from_center(glam::IVec2::new(250, 310), 21, 21);
        assert!(player_reached_exit(on_exit, Some(exit)));
        assert!(!player_reached_exit(beside, Some(exit)));
        assert!(!player_reached_exit(on_exit, None));
    }
}
