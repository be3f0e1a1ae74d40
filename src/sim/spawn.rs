//! Frame-driven spawn scheduling
//!
//! Each kind spawns when the frame counter hits a multiple of its current
//! interval, so cadence is deterministic given the frame counter and
//! distance; only the creation-time choices (skin, placement, phases,
//! oscillation roll) are random. At most one entity of a kind can spawn
//! in a single frame.

use glam::Vec2;
use rand::Rng;

use super::progression;
use super::state::{Obstacle, ObstacleSkin, Oscillation, Pickup, PickupTier, Placement, RunState};
use crate::consts::*;

/// Run the cadence checks for this frame and create whatever is due.
pub fn spawn_entities(state: &mut RunState) {
    let d = state.distance_m;

    let obstacle_interval =
        progression::interval_frames(d, OBSTACLE_BASE_INTERVAL, OBSTACLE_MIN_INTERVAL);
    if state.frame % obstacle_interval == 0 {
        spawn_obstacle(state);
    }

    let pickup_interval =
        progression::interval_frames(d, PICKUP_BASE_INTERVAL, PICKUP_MIN_INTERVAL);
    if state.frame % pickup_interval == 0 {
        spawn_pickup(state, PickupTier::Common);
    }

    // Rare tier: 5x slower cadence, layered with an independent chance
    // gate so rares are rarer than the cadence alone implies
    let rare_interval = pickup_interval * RARE_INTERVAL_FACTOR;
    if state.frame % rare_interval == 0 && state.rng.random::<f32>() < RARE_PICKUP_CHANCE {
        spawn_pickup(state, PickupTier::Rare);
    }
}

fn spawn_obstacle(state: &mut RunState) {
    let ground_y = state.ground_y();

    let skin = if state.rng.random::<bool>() {
        ObstacleSkin::Crate
    } else {
        ObstacleSkin::Barrel
    };
    let placement = if state.rng.random::<f32>() < GROUNDED_OBSTACLE_CHANCE {
        Placement::Grounded
    } else {
        Placement::Aerial
    };
    let base_y = match placement {
        Placement::Grounded => ground_y - OBSTACLE_HEIGHT,
        // Leave the player-sized gap beneath
        Placement::Aerial => ground_y - AERIAL_CLEARANCE - OBSTACLE_HEIGHT,
    };

    let oscillation = if state.distance_m > VERTICAL_MOVE_START_DISTANCE
        && state.rng.random::<f32>() < VERTICAL_MOVE_CHANCE
    {
        Some(Oscillation {
            phase: state.rng.random_range(0.0..std::f32::consts::TAU),
            amplitude: state.rng.random_range(OSC_AMPLITUDE_MIN..OSC_AMPLITUDE_MAX),
        })
    } else {
        None
    };

    let hover_phase = state.rng.random_range(0.0..std::f32::consts::TAU);
    let wobble_phase = state.rng.random_range(0.0..std::f32::consts::TAU);
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos: Vec2::new(state.view_width + OBSTACLE_WIDTH, base_y),
        size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        base_y,
        skin,
        placement,
        oscillation,
        hover_phase,
        wobble_phase,
        wobble: 0.0,
    });
}

fn spawn_pickup(state: &mut RunState, tier: PickupTier) {
    let ground_y = state.ground_y();
    // Anywhere between ground level and a comfortable jump apex
    let base_y = state
        .rng
        .random_range(ground_y - 140.0..ground_y - PICKUP_SIZE);
    let hover_phase = state.rng.random_range(0.0..std::f32::consts::TAU);
    let wobble_phase = state.rng.random_range(0.0..std::f32::consts::TAU);
    let id = state.next_entity_id();
    state.pickups.push(Pickup {
        id,
        pos: Vec2::new(state.view_width + PICKUP_SIZE, base_y),
        size: Vec2::splat(PICKUP_SIZE),
        base_y,
        tier,
        hover_phase,
        wobble_phase,
        wobble: 0.0,
    });
}
