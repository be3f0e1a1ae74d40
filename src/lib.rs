//! Rooftop Run - a side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (progression, spawning, collisions, particles)
//! - `highscores`: Persisted best score
//! - `settings`: Effects preferences
//!
//! Rendering and input wiring live in the host page; the crate exposes
//! per-frame callbacks and read-only snapshots for the host to draw.

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::{EffectsPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Default viewport before the first resize event arrives
    pub const DEFAULT_VIEW_WIDTH: f32 = 960.0;
    pub const DEFAULT_VIEW_HEIGHT: f32 = 540.0;
    /// Height of the ground strip at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 60.0;

    /// Player defaults - fixed horizontal position, jumps only
    pub const PLAYER_X: f32 = 120.0;
    pub const PLAYER_WIDTH: f32 = 36.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;

    /// Jump physics (pixels per frame, y grows downward)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_VELOCITY: f32 = -12.5;
    /// Upward velocity multiplier applied on an early jump release
    pub const JUMP_CUT_FACTOR: f32 = 0.45;

    /// Scroll speed curve: base + log_base * log10(1 + d * log_scale)
    pub const BASE_SPEED: f32 = 5.0;
    pub const SPEED_LOG_BASE: f32 = 3.0;
    pub const SPEED_LOG_SCALE: f32 = 0.08;
    /// Distance gained per frame is speed divided by this
    pub const DISTANCE_DIVISOR: f32 = 10.0;

    /// Spawn cadence curve: base - log_base * log10(1 + d * log_scale), floored
    pub const OBSTACLE_BASE_INTERVAL: f32 = 90.0;
    pub const OBSTACLE_MIN_INTERVAL: f32 = 42.0;
    pub const PICKUP_BASE_INTERVAL: f32 = 75.0;
    pub const PICKUP_MIN_INTERVAL: f32 = 36.0;
    pub const INTERVAL_LOG_BASE: f32 = 24.0;
    pub const INTERVAL_LOG_SCALE: f32 = 0.08;

    /// Rare pickups run on a 5x slower cadence with an extra chance gate
    pub const RARE_INTERVAL_FACTOR: u64 = 5;
    pub const RARE_PICKUP_CHANCE: f32 = 0.3;

    /// Obstacle placement: grounded (jump over) vs aerial (run under)
    pub const GROUNDED_OBSTACLE_CHANCE: f32 = 0.7;
    /// Distance after which new obstacles may oscillate vertically
    pub const VERTICAL_MOVE_START_DISTANCE: f32 = 300.0;
    pub const VERTICAL_MOVE_CHANCE: f32 = 0.3;

    /// Obstacle and pickup extents
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_HEIGHT: f32 = 44.0;
    /// Gap left under an aerial obstacle - the player must fit through
    pub const AERIAL_CLEARANCE: f32 = PLAYER_HEIGHT + 12.0;
    pub const PICKUP_SIZE: f32 = 24.0;

    /// Entities are removed once this far past the left edge
    pub const OFFSCREEN_MARGIN: f32 = 120.0;

    /// Wobble rotation - amplitude and frequency pick up with speed
    pub const WOBBLE_BASE_AMPLITUDE: f32 = 0.08;
    pub const WOBBLE_SPEED_AMPLITUDE: f32 = 0.004;
    pub const WOBBLE_BASE_FREQ: f32 = 0.10;
    pub const WOBBLE_SPEED_FREQ: f32 = 0.002;

    /// Hover - gentle bob around spawn height
    pub const HOVER_AMPLITUDE: f32 = 6.0;
    pub const HOVER_FREQ: f32 = 0.08;

    /// Vertical oscillation - the amplitude is rolled per obstacle
    pub const OSC_AMPLITUDE_MIN: f32 = 30.0;
    pub const OSC_AMPLITUDE_MAX: f32 = 70.0;
    pub const OSC_FREQ: f32 = 0.03;

    /// Particle tuning
    pub const PARTICLE_GRAVITY: f32 = 0.25;
    pub const CRASH_BURST_COUNT: usize = 40;
    pub const CRASH_BURST_LIFETIME: u32 = 45;
    pub const COLLECT_BURST_COUNT: usize = 12;
    pub const COLLECT_BURST_LIFETIME: u32 = 30;

    /// Score values per pickup tier
    pub const COMMON_PICKUP_VALUE: u32 = 1;
    pub const RARE_PICKUP_VALUE: u32 = 5;
}
