//! Edge spawner
//!
//! Every `spawn_period` frames one enemy appears at a random point on a
//! random side of the arena.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// Arena side an enemy entered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// True on frames where a spawn is due
#[inline]
pub fn spawn_due(frame: u64, config: &SimulationConfig) -> bool {
    frame % config.spawn_period as u64 == 0
}

/// Pick a side uniformly, then a point uniformly along it
pub fn random_edge_point(rng: &mut impl Rng, config: &SimulationConfig) -> (Edge, Vec2) {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let pos = match edge {
        Edge::Top => Vec2::new(rng.random_range(0.0..=config.width), 0.0),
        Edge::Bottom => Vec2::new(rng.random_range(0.0..=config.width), config.height),
        Edge::Left => Vec2::new(0.0, rng.random_range(0.0..=config.height)),
        Edge::Right => Vec2::new(config.width, rng.random_range(0.0..=config.height)),
    };
    (edge, pos)
}
