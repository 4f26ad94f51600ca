//! Predictive pursuit steering
//!
//! Enemies don't chase where the tank is, they chase where it will be if it
//! keeps its current velocity for a fixed number of frames.

use glam::Vec2;

/// Where the tank is expected to be `lead_frames` from now
#[inline]
pub fn predicted_target(target_pos: Vec2, target_vel: Vec2, lead_frames: f32) -> Vec2 {
    target_pos + target_vel * lead_frames
}

/// Unit steering direction from `pos` toward the predicted target
///
/// Returns `Vec2::ZERO` when the chaser already sits on the predicted point.
pub fn pursuit_direction(pos: Vec2, target_pos: Vec2, target_vel: Vec2, lead_frames: f32) -> Vec2 {
    (predicted_target(target_pos, target_vel, lead_frames) - pos).normalize_or_zero()
}
