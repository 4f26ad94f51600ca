//! Collision detection and resolution
//!
//! Two passes per frame: the lose-check (any enemy touching the tank) and
//! the score-check (projectiles against enemies). Both use strict
//! circle-overlap tests, so bodies exactly touching do not collide.

use glam::Vec2;

use super::body::{Enemy, Projectile, Tank};
use super::registry::EntityRegistry;
use crate::config::SimulationConfig;

/// True if two circles (given as centres and summed radii) overlap
#[inline]
pub fn overlaps(a: Vec2, b: Vec2, reach: f32) -> bool {
    a.distance_squared(b) < reach * reach
}

/// First enemy found touching the tank, if any
///
/// Stops scanning at the first hit; any hit means the session is over.
pub fn find_tank_hit<'a>(
    tank: &Tank,
    enemies: &'a [Enemy],
    config: &SimulationConfig,
) -> Option<&'a Enemy> {
    let reach = config.lose_distance();
    enemies.iter().find(|e| overlaps(e.pos, tank.pos, reach))
}

/// A projectile that destroyed an enemy this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub enemy: Enemy,
    pub projectile: Projectile,
}

/// Match projectiles against enemies and remove every matched pair
///
/// Enemies are visited from the newest to the oldest. Each enemy claims the
/// newest still-live projectile overlapping it, and both leave the registry
/// before the next enemy is tested, so each entity takes part in at most one
/// hit per frame. Returned hits are in the order they were claimed.
pub fn resolve_projectile_hits(registry: &mut EntityRegistry, config: &SimulationConfig) -> Vec<Hit> {
    let reach = config.hit_distance();
    let mut hits = Vec::new();

    for enemy_idx in (0..registry.enemies().len()).rev() {
        let enemy_pos = registry.enemies()[enemy_idx].pos;
        let claimed = registry
            .projectiles()
            .iter()
            .rposition(|p| overlaps(p.pos, enemy_pos, reach));

        if let Some(projectile_idx) = claimed {
            let (enemy, projectile) = registry.remove_pair(enemy_idx, projectile_idx);
            hits.push(Hit { enemy, projectile });
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        // tank_half_size 8, enemy_radius 8, projectile_radius 3
        SimulationConfig::for_arena(1920.0, 1080.0)
    }

    fn add_enemy(registry: &mut EntityRegistry, pos: Vec2) -> u32 {
        let id = registry.next_entity_id();
        registry.add_enemy(Enemy::new(id, pos));
        id
    }

    fn add_projectile(registry: &mut EntityRegistry, pos: Vec2) -> u32 {
        let id = registry.next_entity_id();
        registry.add_projectile(Projectile {
            id,
            pos,
            vel: Vec2::ZERO,
        });
        id
    }

    #[test]
    fn test_overlap_is_strict() {
        assert!(overlaps(Vec2::ZERO, Vec2::new(10.9, 0.0), 11.0));
        assert!(!overlaps(Vec2::ZERO, Vec2::new(11.0, 0.0), 11.0));
        assert!(!overlaps(Vec2::ZERO, Vec2::new(0.0, -11.0), 11.0));
    }

    #[test]
    fn test_tank_hit_threshold() {
        let config = config();
        let tank = Tank::centered(&config);
        let reach = config.lose_distance();

        let outside = [Enemy::new(1, tank.pos + Vec2::new(reach, 0.0))];
        assert!(find_tank_hit(&tank, &outside, &config).is_none());

        let inside = [
            Enemy::new(1, tank.pos + Vec2::new(reach + 5.0, 0.0)),
            Enemy::new(2, tank.pos + Vec2::new(0.0, reach - 0.01)),
        ];
        let hit = find_tank_hit(&tank, &inside, &config).expect("enemy inside threshold");
        assert_eq!(hit.id, 2);
    }

    #[test]
    fn test_projectile_exactly_touching_misses() {
        let config = config();
        let mut registry = EntityRegistry::new();
        add_enemy(&mut registry, Vec2::new(100.0, 100.0));
        add_projectile(&mut registry, Vec2::new(100.0 + config.hit_distance(), 100.0));

        let hits = resolve_projectile_hits(&mut registry, &config);
        assert!(hits.is_empty());
        assert_eq!(registry.enemies().len(), 1);
        assert_eq!(registry.projectiles().len(), 1);
    }

    #[test]
    fn test_each_entity_matched_at_most_once() {
        let config = config();
        let mut registry = EntityRegistry::new();
        // All four mutually within range
        add_enemy(&mut registry, Vec2::new(100.0, 100.0));
        add_enemy(&mut registry, Vec2::new(102.0, 100.0));
        add_projectile(&mut registry, Vec2::new(101.0, 101.0));
        add_projectile(&mut registry, Vec2::new(101.0, 99.0));

        let hits = resolve_projectile_hits(&mut registry, &config);
        assert_eq!(hits.len(), 2);
        assert!(registry.enemies().is_empty());
        assert!(registry.projectiles().is_empty());
    }

    #[test]
    fn test_newest_enemy_claims_newest_projectile() {
        let config = config();
        let mut registry = EntityRegistry::new();
        let e_old = add_enemy(&mut registry, Vec2::new(100.0, 100.0));
        let e_new = add_enemy(&mut registry, Vec2::new(102.0, 100.0));
        let p_old = add_projectile(&mut registry, Vec2::new(101.0, 100.0));
        let p_new = add_projectile(&mut registry, Vec2::new(101.0, 102.0));

        let hits = resolve_projectile_hits(&mut registry, &config);
        let pairs: Vec<(u32, u32)> = hits.iter().map(|h| (h.enemy.id, h.projectile.id)).collect();
        assert_eq!(pairs, vec![(e_new, p_new), (e_old, p_old)]);
    }

    #[test]
    fn test_extra_projectile_survives() {
        let config = config();
        let mut registry = EntityRegistry::new();
        add_enemy(&mut registry, Vec2::new(100.0, 100.0));
        let first = add_projectile(&mut registry, Vec2::new(100.0, 101.0));
        add_projectile(&mut registry, Vec2::new(100.0, 99.0));

        let hits = resolve_projectile_hits(&mut registry, &config);
        assert_eq!(hits.len(), 1);
        assert_eq!(registry.projectiles().len(), 1);
        assert_eq!(registry.projectiles()[0].id, first);
    }

    #[test]
    fn test_unrelated_entities_untouched() {
        let config = config();
        let mut registry = EntityRegistry::new();
        let far_enemy = add_enemy(&mut registry, Vec2::new(500.0, 500.0));
        add_enemy(&mut registry, Vec2::new(100.0, 100.0));
        let far_shot = add_projectile(&mut registry, Vec2::new(900.0, 100.0));
        add_projectile(&mut registry, Vec2::new(104.0, 100.0));

        let hits = resolve_projectile_hits(&mut registry, &config);
        assert_eq!(hits.len(), 1);
        assert_eq!(registry.enemies()[0].id, far_enemy);
        assert_eq!(registry.projectiles()[0].id, far_shot);
    }
}
