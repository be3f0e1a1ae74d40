//! Run state and core simulation types
//!
//! Everything mutable about a run lives here: progress counters, the
//! player, live entity collections, particles, and the run RNG. The state
//! is owned by the platform wrapper and threaded through `tick` once per
//! host frame; there are no process-wide singletons.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Aabb;
use super::particles::{Particle, ParticleSystem};
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunPhase {
    /// Active gameplay
    Running,
    /// Terminal collision happened; physics are frozen
    GameOver,
}

/// Obstacle visual variant - two mutually exclusive skins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObstacleSkin {
    Crate,
    Barrel,
}

/// Obstacle placement class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Placement {
    /// Sits on the ground, jumped over
    Grounded,
    /// Floats with a traversable gap beneath, run under
    Aerial,
}

/// Vertical oscillation parameters, rolled once at creation and fixed for
/// the obstacle's lifetime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Oscillation {
    pub phase: f32,
    pub amplitude: f32,
}

/// An obstacle entity
#[derive(Debug, Clone, Serialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner, y is the current (possibly offset) position
    pub pos: Vec2,
    pub size: Vec2,
    /// Spawn height that hover/oscillation orbit around
    pub base_y: f32,
    pub skin: ObstacleSkin,
    pub placement: Placement,
    pub oscillation: Option<Oscillation>,
    pub hover_phase: f32,
    pub wobble_phase: f32,
    /// Current wobble rotation in radians, for drawing
    pub wobble: f32,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Pickup value class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickupTier {
    Common,
    Rare,
}

impl PickupTier {
    pub fn value(self) -> u32 {
        match self {
            PickupTier::Common => COMMON_PICKUP_VALUE,
            PickupTier::Rare => RARE_PICKUP_VALUE,
        }
    }
}

/// A collectible pickup entity
#[derive(Debug, Clone, Serialize)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub base_y: f32,
    pub tier: PickupTier,
    pub hover_phase: f32,
    pub wobble_phase: f32,
    pub wobble: f32,
}

impl Pickup {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// The player character. Fixed horizontal position; only vertical motion.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    pub grounded: bool,
    /// Whether the variable-jump cut has been spent this airborne phase
    jump_cut_spent: bool,
}

impl Player {
    pub fn new(ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, ground_y - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            grounded: true,
            jump_cut_spent: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Grounded -> Airborne transition on jump input.
    pub fn jump(&mut self) {
        if self.grounded {
            self.vel_y = JUMP_VELOCITY;
            self.grounded = false;
            self.jump_cut_spent = false;
        }
    }

    /// Early jump release dampens the upward velocity once, shortening
    /// the jump. A second release in the same airborne phase is a no-op.
    pub fn cut_jump(&mut self) {
        if !self.grounded && self.vel_y < 0.0 && !self.jump_cut_spent {
            self.vel_y *= JUMP_CUT_FACTOR;
            self.jump_cut_spent = true;
        }
    }

    /// One frame of jump physics: gravity, integration, ground clamp.
    pub fn step(&mut self, ground_y: f32) {
        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;
        if self.pos.y >= ground_y - self.size.y {
            self.pos.y = ground_y - self.size.y;
            self.vel_y = 0.0;
            self.grounded = true;
        }
    }
}

/// Complete run state, advanced once per host frame.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Run RNG - every random creation choice flows through here
    pub rng: Pcg32,
    pub phase: RunPhase,
    /// Frame counter, the time base for cadence and procedural motion
    pub frame: u64,
    /// Elapsed distance in meters, the sole difficulty input
    pub distance_m: f32,
    /// Current scroll speed, recomputed from distance each frame
    pub speed: f32,
    pub score: u32,
    /// In-memory best score; persisted by the platform wrapper
    pub high_score: u32,
    pub view_width: f32,
    pub view_height: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub pickups: Vec<Pickup>,
    pub particles: ParticleSystem,
    next_id: u32,
}

impl RunState {
    pub fn new(seed: u64, view_width: f32, view_height: f32, high_score: u32) -> Self {
        let ground_y = view_height - GROUND_HEIGHT;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RunPhase::Running,
            frame: 0,
            distance_m: 0.0,
            speed: BASE_SPEED,
            score: 0,
            high_score,
            view_width,
            view_height,
            player: Player::new(ground_y),
            obstacles: Vec::new(),
            pickups: Vec::new(),
            particles: ParticleSystem::new(),
            next_id: 1,
        }
    }

    /// The y coordinate entities stand on.
    pub fn ground_y(&self) -> f32 {
        self.view_height - GROUND_HEIGHT
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start a fresh run: zero score and distance, clear all live sets,
    /// recreate the player grounded at its initial position. The best
    /// score survives resets.
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.phase = RunPhase::Running;
        self.frame = 0;
        self.distance_m = 0.0;
        self.speed = BASE_SPEED;
        self.score = 0;
        self.player = Player::new(self.ground_y());
        self.obstacles.clear();
        self.pickups.clear();
        self.particles.clear();
        self.next_id = 1;
    }

    /// Viewport change from the host. Background-only state is the
    /// host's problem; here we just keep the player on the new ground
    /// line and leave live entity collections alone.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        self.view_width = width;
        self.view_height = height;
        let ground_y = self.ground_y();
        if self.player.pos.y > ground_y - self.player.size.y {
            self.player.pos.y = ground_y - self.player.size.y;
            self.player.vel_y = 0.0;
            self.player.grounded = true;
        }
    }

    /// Read-only view for the drawing host. `particle_budget` caps how
    /// many live particles are exposed (0 hides them entirely).
    pub fn snapshot(&self, particle_budget: usize) -> Snapshot<'_> {
        let live = self.particles.live();
        Snapshot {
            phase: self.phase,
            frame: self.frame,
            distance_m: self.distance_m,
            speed: self.speed,
            score: self.score,
            high_score: self.high_score,
            player: &self.player,
            obstacles: &self.obstacles,
            pickups: &self.pickups,
            particles: &live[..live.len().min(particle_budget)],
        }
    }
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub phase: RunPhase,
    pub frame: u64,
    pub distance_m: f32,
    pub speed: f32,
    pub score: u32,
    pub high_score: u32,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub pickups: &'a [Pickup],
    pub particles: &'a [Particle],
}
