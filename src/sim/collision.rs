//! Collision detection and outcome resolution
//!
//! Axis-aligned bounding boxes with open-interval overlap: boxes that
//! merely share an edge do not collide. The per-frame pass tests the
//! player against obstacles first (terminal), then pickups (scoring).

use glam::Vec2;

use super::particles::Color;
use super::state::{RunPhase, RunState};
use crate::consts::*;

/// Axis-aligned bounding box in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            left: pos.x,
            top: pos.y,
            right: pos.x + size.x,
            bottom: pos.y + size.y,
        }
    }

    /// Open-interval overlap test; exact edge touch is not a collision.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// Resolve player-vs-world collisions for this frame.
///
/// Obstacles are tested in live-set order; the first overlap ends the run,
/// emits a crash burst in the player's color, and records a new best score
/// if beaten. Terminal state supersedes everything else, so pickups are
/// only tested when no obstacle hit. Pickup collection does not stop the
/// scan - several pickups can be collected in one frame.
pub fn resolve_collisions(state: &mut RunState) {
    if state.phase != RunPhase::Running {
        return;
    }

    let player_box = state.player.aabb();

    for obstacle in &state.obstacles {
        if player_box.overlaps(&obstacle.aabb()) {
            state.phase = RunPhase::GameOver;
            let center = state.player.center();
            state.particles.spawn_burst(
                center,
                Color::PLAYER,
                CRASH_BURST_COUNT,
                CRASH_BURST_LIFETIME,
                (2.0, 7.0),
                &mut state.rng,
            );
            if state.score > state.high_score {
                state.high_score = state.score;
                log::info!("new best score: {}", state.score);
            }
            log::info!(
                "run over at {:.0}m, score {}",
                state.distance_m,
                state.score
            );
            return;
        }
    }

    let mut i = 0;
    while i < state.pickups.len() {
        if player_box.overlaps(&state.pickups[i].aabb()) {
            let pickup = state.pickups.swap_remove(i);
            state.score += pickup.tier.value();
            let color = match pickup.tier {
                super::state::PickupTier::Common => Color::COMMON_PICKUP,
                super::state::PickupTier::Rare => Color::RARE_PICKUP,
            };
            state.particles.spawn_burst(
                pickup.pos + pickup.size * 0.5,
                color,
                COLLECT_BURST_COUNT,
                COLLECT_BURST_LIFETIME,
                (1.0, 4.0),
                &mut state.rng,
            );
        } else {
            i += 1;
        }
    }
}
