//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session by exactly one frame.

use glam::Vec2;

use super::body::{Enemy, Projectile};
use super::collision::{find_tank_hit, resolve_projectile_hits};
use super::spawner::{random_edge_point, spawn_due};
use super::state::{GameEvent, GamePhase, GameState};

/// Control vectors for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Movement force (already clamped by the input layer)
    pub movement: Vec2,
    /// Aim direction, unnormalized; zero means not firing
    pub aim: Vec2,
}

impl TickInput {
    pub fn is_firing(&self) -> bool {
        self.aim != Vec2::ZERO
    }
}

/// What one frame produced
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Phase after the frame
    pub phase: GamePhase,
    /// Enemies destroyed this frame
    pub score_delta: u64,
    pub events: Vec<GameEvent>,
}

impl StepReport {
    fn idle(phase: GamePhase) -> Self {
        Self {
            phase,
            score_delta: 0,
            events: Vec::new(),
        }
    }
}

/// Advance the game state by one frame
///
/// Order: tank, fire, projectiles, enemies, lose-check, score-check, frame
/// counter, spawn. A lose flips the phase to `GameOver` but the rest of the
/// frame still runs, so hits landing on the losing frame still score. Once
/// the session is over this does nothing until `GameState::restart`.
pub fn tick(state: &mut GameState, input: &TickInput) -> StepReport {
    if state.phase == GamePhase::GameOver {
        return StepReport::idle(state.phase);
    }

    let mut report = StepReport::idle(GamePhase::Playing);

    state.tank.update(input.movement, &state.config);

    // Fire on the frame counter before it advances (frames 0, period, 2*period, ...)
    if input.is_firing() && state.frame % state.config.fire_period as u64 == 0 {
        let id = state.entities.next_entity_id();
        let projectile =
            Projectile::fired_from(id, &state.tank, input.aim, state.config.projectile_speed);
        state.entities.add_projectile(projectile);
        report.events.push(GameEvent::ProjectileFired { id });
    }

    state.entities.integrate_projectiles(&state.config);
    state
        .entities
        .integrate_enemies(&state.tank, state.score, &state.config);

    let lost_to = find_tank_hit(&state.tank, state.entities.enemies(), &state.config).map(|e| e.id);
    if let Some(enemy_id) = lost_to {
        log::info!(
            "Tank destroyed by enemy {} at frame {} (score {})",
            enemy_id,
            state.frame,
            state.score
        );
        report.events.push(GameEvent::TankDestroyed { enemy_id });
        state.phase = GamePhase::GameOver;
        report.phase = GamePhase::GameOver;
    }

    for hit in resolve_projectile_hits(&mut state.entities, &state.config) {
        log::debug!(
            "Enemy {} destroyed by projectile {}",
            hit.enemy.id,
            hit.projectile.id
        );
        report.events.push(GameEvent::EnemyDestroyed {
            enemy_id: hit.enemy.id,
            projectile_id: hit.projectile.id,
        });
        report.score_delta += 1;
    }
    state.score += report.score_delta;

    state.frame += 1;
    if spawn_due(state.frame, &state.config) {
        spawn_enemy(state, &mut report);
    }

    report
}

fn spawn_enemy(state: &mut GameState, report: &mut StepReport) {
    if let Some(cap) = state.config.max_enemies {
        if state.entities.enemies().len() >= cap {
            log::warn!("Enemy cap {} reached, skipping spawn at frame {}", cap, state.frame);
            return;
        }
    }

    let (edge, pos) = random_edge_point(&mut state.rng, &state.config);
    let id = state.entities.next_entity_id();
    state.entities.add_enemy(Enemy::new(id, pos));
    log::debug!("Enemy {} spawned on {:?} edge at {:?}", id, edge, pos);
    report.events.push(GameEvent::EnemySpawned { id, edge });
}
