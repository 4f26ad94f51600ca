//! Kinematic entities
//!
//! The tank and enemies share one motion shape (position + velocity with
//! friction damping); projectiles fly straight with no damping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pursuit::pursuit_direction;
use crate::config::SimulationConfig;

/// The player's hover tank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Tank {
    /// Tank at rest in the middle of the arena
    pub fn centered(config: &SimulationConfig) -> Self {
        Self {
            pos: Vec2::new(config.width / 2.0, config.height / 2.0).floor(),
            vel: Vec2::ZERO,
        }
    }

    /// Advance one frame under a movement force
    ///
    /// Force is applied, then friction, then the speed cap, then position is
    /// integrated and clamped to the arena. Runs every frame even with a zero
    /// force so the tank coasts to a stop.
    pub fn update(&mut self, force: Vec2, config: &SimulationConfig) {
        self.vel += force * config.tank_force_gain;
        self.vel *= config.tank_friction;
        self.vel = self.vel.clamp_length_max(config.max_tank_speed);
        self.pos += self.vel;
        self.pos = self
            .pos
            .clamp(Vec2::ZERO, Vec2::new(config.width, config.height));
    }
}

/// A shot fired from the tank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    /// Launch from the tank along `aim`, inheriting the tank's velocity
    ///
    /// A zero aim vector launches with only the tank's velocity; callers gate
    /// firing on a non-zero aim.
    pub fn fired_from(id: u32, tank: &Tank, aim: Vec2, speed: f32) -> Self {
        Self {
            id,
            pos: tank.pos,
            vel: aim.normalize_or_zero() * speed + tank.vel,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// True once the projectile has left the arena (the edges themselves are inside)
    pub fn is_out_of_bounds(&self, config: &SimulationConfig) -> bool {
        !(0.0..=config.width).contains(&self.pos.x) || !(0.0..=config.height).contains(&self.pos.y)
    }
}

/// A hostile chaser
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Advance one frame, steering toward where the tank is headed
    ///
    /// Thrust grows 1% per point of score. Speed is only damped, never capped.
    pub fn update(&mut self, tank: &Tank, score: u64, config: &SimulationConfig) {
        let dir = pursuit_direction(self.pos, tank.pos, tank.vel, config.lead_frames);
        self.vel += dir * thrust_for_score(config.enemy_thrust, score);
        self.vel *= config.enemy_friction;
        self.pos += self.vel;
    }
}

/// Enemy acceleration for the current score
#[inline]
pub fn thrust_for_score(base: f32, score: u64) -> f32 {
    base * (1.0 + score as f32 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig::for_arena(800.0, 600.0)
    }

    #[test]
    fn test_tank_centered() {
        let tank = Tank::centered(&config());
        assert_eq!(tank.pos, Vec2::new(400.0, 300.0));
        assert_eq!(tank.vel, Vec2::ZERO);
    }

    #[test]
    fn test_tank_force_then_friction() {
        let config = config();
        let mut tank = Tank::centered(&config);
        tank.update(Vec2::new(2.0, 0.0), &config);
        // 2.0 * 0.5 gain, then * 0.98 friction
        assert!((tank.vel.x - 0.98).abs() < 1e-6);
        assert!((tank.pos.x - 400.98).abs() < 1e-4);
        assert_eq!(tank.vel.y, 0.0);
    }

    #[test]
    fn test_tank_speed_cap_preserves_direction() {
        let config = config();
        let mut tank = Tank::centered(&config);
        tank.update(Vec2::new(300.0, 400.0), &config);
        assert!((tank.vel.length() - config.max_tank_speed).abs() < 1e-4);
        let dir = tank.vel.normalize();
        assert!((dir.x - 0.6).abs() < 1e-5);
        assert!((dir.y - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_tank_clamped_to_arena() {
        let config = config();
        let mut tank = Tank {
            pos: Vec2::new(1.0, 599.0),
            vel: Vec2::new(-4.0, 4.0),
        };
        tank.update(Vec2::ZERO, &config);
        assert_eq!(tank.pos.x, 0.0);
        assert_eq!(tank.pos.y, 600.0);
    }

    #[test]
    fn test_tank_coasts_to_rest() {
        let config = config();
        let mut tank = Tank::centered(&config);
        tank.vel = Vec2::new(1.0, -1.0);
        for _ in 0..2000 {
            tank.update(Vec2::ZERO, &config);
        }
        assert!(tank.vel.length() < 1e-6);
    }

    #[test]
    fn test_projectile_inherits_tank_velocity() {
        let tank = Tank {
            pos: Vec2::new(10.0, 20.0),
            vel: Vec2::new(1.0, 0.0),
        };
        let p = Projectile::fired_from(1, &tank, Vec2::new(0.0, -50.0), 7.0);
        assert_eq!(p.pos, tank.pos);
        assert!((p.vel - Vec2::new(1.0, -7.0)).length() < 1e-6);
    }

    #[test]
    fn test_projectile_zero_aim_is_finite() {
        let tank = Tank::centered(&config());
        let p = Projectile::fired_from(1, &tank, Vec2::ZERO, 7.0);
        assert!(p.vel.is_finite());
        assert_eq!(p.vel, Vec2::ZERO);
    }

    #[test]
    fn test_projectile_bounds_are_inclusive() {
        let config = config();
        let mut p = Projectile {
            id: 1,
            pos: Vec2::new(800.0, 300.0),
            vel: Vec2::new(1.0, 0.0),
        };
        assert!(!p.is_out_of_bounds(&config));
        p.pos.x = 0.0;
        assert!(!p.is_out_of_bounds(&config));

        p.pos.x = 799.0;
        p.update();
        assert!(!p.is_out_of_bounds(&config));
        p.update();
        assert!(p.is_out_of_bounds(&config));

        let below = Projectile {
            id: 2,
            pos: Vec2::new(10.0, -0.5),
            vel: Vec2::ZERO,
        };
        assert!(below.is_out_of_bounds(&config));
    }

    #[test]
    fn test_projectile_has_no_damping() {
        let mut p = Projectile {
            id: 1,
            pos: Vec2::ZERO,
            vel: Vec2::new(3.0, 4.0),
        };
        for _ in 0..10 {
            p.update();
        }
        assert_eq!(p.vel, Vec2::new(3.0, 4.0));
        assert!((p.pos - Vec2::new(30.0, 40.0)).length() < 1e-4);
    }

    #[test]
    fn test_enemy_thrust_scales_with_score() {
        assert!((thrust_for_score(0.08, 0) - 0.08).abs() < 1e-7);
        assert!((thrust_for_score(0.08, 100) - 0.16).abs() < 1e-7);
        assert!((thrust_for_score(0.08, 50) - 0.12).abs() < 1e-7);
    }

    #[test]
    fn test_enemy_steps_toward_tank() {
        let config = config();
        let tank = Tank::centered(&config);
        let mut enemy = Enemy::new(1, Vec2::new(0.0, 300.0));
        enemy.update(&tank, 0, &config);
        // 0.08 thrust * 0.95 friction along +x
        assert!((enemy.vel.x - 0.076).abs() < 1e-6);
        assert!(enemy.vel.y.abs() < 1e-6);
        assert!((enemy.pos.x - 0.076).abs() < 1e-6);
    }

    #[test]
    fn test_enemy_on_top_of_tank_does_not_produce_nan() {
        let config = config();
        let tank = Tank::centered(&config);
        let mut enemy = Enemy::new(1, tank.pos);
        enemy.update(&tank, 0, &config);
        assert!(enemy.pos.is_finite());
        assert_eq!(enemy.vel, Vec2::ZERO);
    }

    #[test]
    fn test_enemy_speed_is_not_capped() {
        // Enemies only feel friction, so a huge score drives them past the tank cap
        let config = config();
        let tank = Tank {
            pos: Vec2::new(800.0, 300.0),
            vel: Vec2::ZERO,
        };
        let mut enemy = Enemy::new(1, Vec2::new(0.0, 300.0));
        for _ in 0..3 {
            enemy.update(&tank, 10_000, &config);
        }
        assert!(enemy.vel.length() > config.max_tank_speed);
    }
}
