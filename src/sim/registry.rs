//! Live entity collections
//!
//! Projectiles and enemies each live in a `Vec` kept in insertion order.
//! Removal always shifts survivors down, so iteration order of what's left
//! never changes.

use super::body::{Enemy, Projectile, Tank};
use crate::config::SimulationConfig;

/// Owns every live projectile and enemy for a session
#[derive(Debug, Clone)]
pub struct EntityRegistry {
    projectiles: Vec<Projectile>,
    enemies: Vec<Enemy>,
    /// Next entity ID
    next_id: u32,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            projectiles: Vec::new(),
            enemies: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drop every entity and restart ID allocation
    pub fn clear(&mut self) {
        self.projectiles.clear();
        self.enemies.clear();
        self.next_id = 1;
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn add_projectile(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Move every projectile, then drop the ones that left the arena
    ///
    /// Returns how many expired.
    pub fn integrate_projectiles(&mut self, config: &SimulationConfig) -> usize {
        let before = self.projectiles.len();
        self.projectiles.retain_mut(|p| {
            p.update();
            !p.is_out_of_bounds(config)
        });
        before - self.projectiles.len()
    }

    /// Steer and move every enemy toward the tank
    pub fn integrate_enemies(&mut self, tank: &Tank, score: u64, config: &SimulationConfig) {
        for enemy in &mut self.enemies {
            enemy.update(tank, score, config);
        }
    }

    /// Remove a matched enemy/projectile pair by index
    ///
    /// Indices refer to the collections as they are at the time of the call.
    pub fn remove_pair(&mut self, enemy_idx: usize, projectile_idx: usize) -> (Enemy, Projectile) {
        let projectile = self.projectiles.remove(projectile_idx);
        let enemy = self.enemies.remove(enemy_idx);
        (enemy, projectile)
    }
}
