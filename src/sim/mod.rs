//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per host frame callback
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod particles;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, resolve_collisions};
pub use particles::{Color, Particle, ParticleSystem};
pub use state::{
    Obstacle, ObstacleSkin, Oscillation, Pickup, PickupTier, Placement, Player, RunPhase,
    RunState, Snapshot,
};
pub use tick::{FrameInput, tick};
