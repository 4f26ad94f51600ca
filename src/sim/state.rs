//! Game state and core simulation types
//!
//! One `GameState` holds a whole session: config, tank, live entities,
//! score, frame counter and the spawn RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Enemy, Projectile, Tank};
use super::registry::EntityRegistry;
use super::spawner::Edge;
use crate::config::SimulationConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// An enemy reached the tank; terminal until restart
    GameOver,
}

/// Something notable that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { id: u32 },
    EnemySpawned { id: u32, edge: Edge },
    EnemyDestroyed { enemy_id: u32, projectile_id: u32 },
    TankDestroyed { enemy_id: u32 },
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimulationConfig,
    /// Base seed for the run
    pub seed: u64,
    /// Sessions started since construction (0 for the first)
    pub session: u64,
    pub tank: Tank,
    pub entities: EntityRegistry,
    pub score: u64,
    /// Frames simulated this session
    pub frame: u64,
    pub phase: GamePhase,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Start a new session in a fresh arena
    ///
    /// `config` must pass `SimulationConfig::validate`; a zero fire or spawn
    /// period would divide by zero in `tick`.
    pub fn new(config: SimulationConfig, seed: u64) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid simulation config: {:?}",
            config.validate()
        );
        log::info!(
            "New session: arena {}x{}, seed {}",
            config.width,
            config.height,
            seed
        );
        Self {
            tank: Tank::centered(&config),
            entities: EntityRegistry::new(),
            score: 0,
            frame: 0,
            phase: GamePhase::Playing,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            session: 0,
            config,
        }
    }

    /// Throw the current session away and begin the next one
    ///
    /// The tank is re-centred, score and frame counter return to zero and
    /// both collections are emptied. The spawn RNG is re-seeded from the base
    /// seed and session index so a whole run stays reproducible.
    pub fn restart(&mut self) {
        log::info!(
            "Restarting after session {} (score {}, {} frames)",
            self.session,
            self.score,
            self.frame
        );
        self.session += 1;
        self.tank = Tank::centered(&self.config);
        self.entities.clear();
        self.score = 0;
        self.frame = 0;
        self.phase = GamePhase::Playing;
        self.rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.session));
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Read-only view for rendering and HUD
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tank: &self.tank,
            projectiles: self.entities.projectiles(),
            enemies: self.entities.enemies(),
            score: self.score,
            frame: self.frame,
            phase: self.phase,
        }
    }
}

/// Borrowed view of one frame's result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub tank: &'a Tank,
    pub projectiles: &'a [Projectile],
    pub enemies: &'a [Enemy],
    pub score: u64,
    pub frame: u64,
    pub phase: GamePhase,
}
