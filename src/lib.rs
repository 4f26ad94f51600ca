//! Hover Tank - A twin-stick arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, pursuit AI, collisions, spawning)
//! - `config`: Arena size and tuning values for one session
//! - `input`: Touch pad translation into per-frame control vectors
//! - `scoreboard`: In-memory best scores across sessions

pub mod config;
pub mod input;
pub mod scoreboard;
pub mod sim;

pub use config::{ConfigError, SimulationConfig};
pub use input::InputMapper;
pub use scoreboard::Scoreboard;

/// Game tuning constants
pub mod consts {
    /// Nominal simulation rate (frames per second)
    pub const FPS: u32 = 60;
    /// Frames between enemy spawns
    pub const SPAWN_RATE: u32 = 60;
    /// Frames between shots while the aim pad is held (5 shots per second)
    pub const FIRE_PERIOD: u32 = FPS / 5;

    /// Tank top speed (units per frame)
    pub const MAX_TANK_SPEED: f32 = 4.2;
    /// Gain applied to the movement force before it is added to velocity
    pub const TANK_FORCE_GAIN: f32 = 0.5;
    /// Per-frame velocity multiplier for the tank
    pub const TANK_FRICTION: f32 = 0.98;

    /// Muzzle speed added on top of the tank's own velocity
    pub const PROJECTILE_SPEED: f32 = 7.0;

    /// Base enemy acceleration toward the predicted target
    pub const ENEMY_THRUST: f32 = 0.08;
    /// Per-frame velocity multiplier for enemies
    pub const ENEMY_FRICTION: f32 = 0.95;
    /// How far ahead (in frames) enemies extrapolate the tank's motion
    pub const LEAD_FRAMES: f32 = 30.0;

    /// Sizes as a fraction of arena height
    pub const TANK_SIZE_FRACTION: f32 = 0.015;
    pub const PROJECTILE_RADIUS_FRACTION: f32 = 0.003;
    pub const ENEMY_RADIUS_FRACTION: f32 = 0.008;
    pub const CONTROL_AREA_FRACTION: f32 = 0.35;

    /// Touch pad centres as a fraction of arena size
    pub const MOVE_PAD_CENTER: (f32, f32) = (0.75, 0.82);
    pub const AIM_PAD_CENTER: (f32, f32) = (0.25, 0.82);
    /// Divisor turning a movement pad offset into a force
    pub const MOVE_PAD_FORCE_SCALE: f32 = 100.0;
}
