//! Difficulty progression curves
//!
//! Pure functions of elapsed distance. Speed grows logarithmically so the
//! early game stays approachable while the late game never plateaus; spawn
//! intervals shrink with the same shape, floored so entities cannot
//! overlap-spawn.

use crate::consts::*;

/// Current scroll speed for a given distance (pixels per frame).
///
/// `speed(0) == BASE_SPEED`; monotone and concave above that.
pub fn speed(distance_m: f32) -> f32 {
    BASE_SPEED + SPEED_LOG_BASE * (1.0 + distance_m * SPEED_LOG_SCALE).log10()
}

/// Spawn interval in frames for a given distance, shrinking from `base`
/// toward `min` as distance grows.
pub fn spawn_interval(distance_m: f32, base: f32, min: f32) -> f32 {
    (base - INTERVAL_LOG_BASE * (1.0 + distance_m * INTERVAL_LOG_SCALE).log10()).max(min)
}

/// Spawn interval rounded to whole frames for cadence checks.
pub fn interval_frames(distance_m: f32, base: f32, min: f32) -> u64 {
    spawn_interval(distance_m, base, min).round().max(1.0) as u64
}

/// Distance gained in one frame at the given speed. This is the sole
/// source of distance accumulation.
pub fn distance_step(speed: f32) -> f32 {
    speed / DISTANCE_DIVISOR
}
