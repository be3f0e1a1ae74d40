//! Object-pooled particle system
//!
//! Bursts under continuous play would otherwise allocate every frame, so
//! expired particles are recycled through a free pool. A particle is either
//! live (updated and drawn) or pooled (inert, fields stale but reusable),
//! never both. Pool capacity grows monotonically and never shrinks.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::consts::PARTICLE_GRAVITY;

/// Solid color; draw alpha comes from the particle's remaining life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const PLAYER: Color = Color { r: 255, g: 96, b: 64 };
    pub const COMMON_PICKUP: Color = Color { r: 255, g: 214, b: 64 };
    pub const RARE_PICKUP: Color = Color { r: 128, g: 96, b: 255 };
}

/// A transient visual-only particle.
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    /// Draw alpha, recomputed from remaining life each frame
    pub alpha: u8,
    life: u32,
    lifetime: u32,
}

impl Particle {
    fn blank() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 0.0,
            color: Color::PLAYER,
            alpha: 0,
            life: 0,
            lifetime: 1,
        }
    }
}

/// Live set plus free pool. Order of the live set is not meaningful, only
/// membership, which is what lets retirement use swap removal.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    live: Vec<Particle>,
    pool: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a retired particle from the pool, or construct a fresh one.
    fn acquire(&mut self) -> Particle {
        self.pool.pop().unwrap_or_else(Particle::blank)
    }

    /// Spawn `count` particles at `pos` with randomized velocities in
    /// `speed_range`, all sharing `color` and `lifetime`.
    pub fn spawn_burst<R: Rng>(
        &mut self,
        pos: Vec2,
        color: Color,
        count: usize,
        lifetime: u32,
        speed_range: (f32, f32),
        rng: &mut R,
    ) {
        let lifetime = lifetime.max(1);
        for _ in 0..count {
            let mut p = self.acquire();
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(speed_range.0..speed_range.1);
            p.pos = pos;
            // Slight upward bias so bursts fountain before gravity wins
            p.vel = Vec2::new(angle.cos() * speed, angle.sin() * speed - 1.0);
            p.size = rng.random_range(2.0..5.0);
            p.color = color;
            p.life = lifetime;
            p.lifetime = lifetime;
            p.alpha = 255;
            self.live.push(p);
        }
    }

    /// Advance all live particles one frame and retire the expired ones.
    pub fn advance(&mut self) {
        let mut i = 0;
        while i < self.live.len() {
            let p = &mut self.live[i];
            p.vel.y += PARTICLE_GRAVITY;
            p.pos += p.vel;
            p.life -= 1;
            p.alpha = (255 * p.life / p.lifetime) as u8;
            if p.life == 0 {
                let dead = self.live.swap_remove(i);
                self.pool.push(dead);
            } else {
                i += 1;
            }
        }
    }

    /// Read-only view of the live set for drawing.
    pub fn live(&self) -> &[Particle] {
        &self.live
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn pool_count(&self) -> usize {
        self.pool.len()
    }

    /// Retire every live particle (run reset).
    pub fn clear(&mut self) {
        self.pool.append(&mut self.live);
    }
}
