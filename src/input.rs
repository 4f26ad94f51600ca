//! Touch pad input
//!
//! Two virtual pads sit along the bottom of the screen: the right half of the
//! screen drives the movement pad, the left half the aim pad. Fingers arrive
//! as normalized `[0, 1]` device coordinates.

use glam::Vec2;

use crate::config::SimulationConfig;
use crate::consts::{AIM_PAD_CENTER, MOVE_PAD_CENTER, MOVE_PAD_FORCE_SCALE};
use crate::sim::TickInput;

/// One finger currently on the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    /// Position in arena units
    pub pos: Vec2,
}

/// Tracks active fingers and turns them into per-frame control vectors
#[derive(Debug, Clone)]
pub struct InputMapper {
    arena: Vec2,
    pad_radius: f32,
    /// Active touches in the order they went down
    touches: Vec<TouchPoint>,
}

impl InputMapper {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            arena: Vec2::new(config.width, config.height),
            pad_radius: (config.control_area_height / 2.0).floor(),
            touches: Vec::new(),
        }
    }

    fn to_arena(&self, norm_x: f32, norm_y: f32) -> Vec2 {
        Vec2::new(norm_x, norm_y) * self.arena
    }

    pub fn finger_down(&mut self, id: u64, norm_x: f32, norm_y: f32) {
        let pos = self.to_arena(norm_x, norm_y);
        match self.touches.iter_mut().find(|t| t.id == id) {
            Some(touch) => touch.pos = pos,
            None => self.touches.push(TouchPoint { id, pos }),
        }
    }

    /// Motion for a finger we never saw go down is ignored
    pub fn finger_motion(&mut self, id: u64, norm_x: f32, norm_y: f32) {
        let pos = self.to_arena(norm_x, norm_y);
        if let Some(touch) = self.touches.iter_mut().find(|t| t.id == id) {
            touch.pos = pos;
        }
    }

    pub fn finger_up(&mut self, id: u64) {
        self.touches.retain(|t| t.id != id);
    }

    /// Lift every finger (e.g. on restart or focus loss)
    pub fn clear(&mut self) {
        self.touches.clear();
    }

    pub fn touches(&self) -> &[TouchPoint] {
        &self.touches
    }

    fn pad_offset(&self, pos: Vec2, center: (f32, f32)) -> Vec2 {
        let center = Vec2::new(center.0, center.1) * self.arena;
        (pos - center).clamp_length_max(self.pad_radius)
    }

    /// Current control vectors
    ///
    /// With several fingers on one half, the one that went down last wins.
    pub fn sample(&self) -> TickInput {
        let mut input = TickInput::default();
        let half_width = (self.arena.x / 2.0).floor();
        for touch in &self.touches {
            if touch.pos.x > half_width {
                input.movement = self.pad_offset(touch.pos, MOVE_PAD_CENTER) / MOVE_PAD_FORCE_SCALE;
            } else {
                input.aim = self.pad_offset(touch.pos, AIM_PAD_CENTER);
            }
        }
        input
    }
}
