//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` is one frame)
//! - Seeded RNG only
//! - Stable iteration order (insertion order per collection)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod pursuit;
pub mod registry;
pub mod spawner;
pub mod state;
pub mod tick;

pub use body::{Enemy, Projectile, Tank, thrust_for_score};
pub use collision::{Hit, find_tank_hit, overlaps, resolve_projectile_hits};
pub use pursuit::{predicted_target, pursuit_direction};
pub use registry::EntityRegistry;
pub use spawner::{Edge, random_edge_point, spawn_due};
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{StepReport, TickInput, tick};
