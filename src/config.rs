//! Session configuration
//!
//! Everything the simulation needs to know about the arena and its tuning
//! is carried in one value handed to `GameState::new`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Arena extents and tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === Arena ===
    pub width: f32,
    pub height: f32,

    // === Sizes ===
    /// Tank square side length
    pub tank_size: f32,
    pub projectile_radius: f32,
    pub enemy_radius: f32,
    /// Diameter of each touch pad
    pub control_area_height: f32,

    // === Tank ===
    pub max_tank_speed: f32,
    pub tank_force_gain: f32,
    pub tank_friction: f32,

    // === Projectiles ===
    pub projectile_speed: f32,

    // === Enemies ===
    pub enemy_thrust: f32,
    pub enemy_friction: f32,
    pub lead_frames: f32,

    // === Timing ===
    pub fps: u32,
    pub fire_period: u32,
    pub spawn_period: u32,
    /// Optional cap on live enemies (None = unbounded)
    pub max_enemies: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::for_arena(1920.0, 1080.0)
    }
}

impl SimulationConfig {
    /// Build a config for an arena, deriving entity sizes from its height
    pub fn for_arena(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            tank_size: (height * TANK_SIZE_FRACTION).floor(),
            projectile_radius: (height * PROJECTILE_RADIUS_FRACTION).floor(),
            enemy_radius: (height * ENEMY_RADIUS_FRACTION).floor(),
            control_area_height: (height * CONTROL_AREA_FRACTION).floor(),
            max_tank_speed: MAX_TANK_SPEED,
            tank_force_gain: TANK_FORCE_GAIN,
            tank_friction: TANK_FRICTION,
            projectile_speed: PROJECTILE_SPEED,
            enemy_thrust: ENEMY_THRUST,
            enemy_friction: ENEMY_FRICTION,
            lead_frames: LEAD_FRAMES,
            fps: FPS,
            fire_period: FIRE_PERIOD,
            spawn_period: SPAWN_RATE,
            max_enemies: None,
        }
    }

    /// Parse a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the frame loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidArena {
                width: self.width,
                height: self.height,
            });
        }
        if self.fire_period == 0 {
            return Err(ConfigError::ZeroPeriod("fire_period"));
        }
        if self.spawn_period == 0 {
            return Err(ConfigError::ZeroPeriod("spawn_period"));
        }
        Ok(())
    }

    /// Half the tank's side, rounded down like the rest of the size table
    pub fn tank_half_size(&self) -> f32 {
        (self.tank_size / 2.0).floor()
    }

    /// Distance below which an enemy touching the tank ends the session
    pub fn lose_distance(&self) -> f32 {
        self.tank_half_size() + self.enemy_radius
    }

    /// Distance below which a projectile destroys an enemy
    pub fn hit_distance(&self) -> f32 {
        self.projectile_radius + self.enemy_radius
    }
}

/// Why a config was rejected
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidArena { width: f32, height: f32 },
    ZeroPeriod(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid config JSON: {e}"),
            ConfigError::InvalidArena { width, height } => {
                write!(f, "arena must have positive extents, got {width}x{height}")
            }
            ConfigError::ZeroPeriod(name) => write!(f, "{name} must be at least 1 frame"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}
