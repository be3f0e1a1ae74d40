//! Per-entity procedural motion
//!
//! Every entity scrolls left at the live scroll speed, so the whole field
//! accelerates together as distance grows. On top of that, sine offsets
//! keyed to the frame counter with per-entity phases keep entities from
//! visually synchronizing: a wobble rotation that picks up with speed, a
//! gentle hover, and the larger clamped vertical oscillation. The three
//! vertical sources are mutually exclusive per entity - oscillation
//! overrides hover, grounded entities get neither.

use super::state::{Obstacle, Pickup, Placement};
use crate::consts::*;

/// Wobble rotation for this frame. Both amplitude and frequency scale
/// up slightly with the current speed.
pub fn wobble_angle(frame: u64, phase: f32, speed: f32) -> f32 {
    let amplitude = WOBBLE_BASE_AMPLITUDE + speed * WOBBLE_SPEED_AMPLITUDE;
    let freq = WOBBLE_BASE_FREQ + speed * WOBBLE_SPEED_FREQ;
    amplitude * (frame as f32 * freq + phase).sin()
}

/// Small vertical bob around the spawn height.
pub fn hover_offset(frame: u64, phase: f32) -> f32 {
    HOVER_AMPLITUDE * (frame as f32 * HOVER_FREQ + phase).sin()
}

/// Advance one obstacle by one frame.
pub fn advance_obstacle(obstacle: &mut Obstacle, frame: u64, speed: f32, ground_y: f32) {
    obstacle.pos.x -= speed;
    obstacle.wobble = wobble_angle(frame, obstacle.wobble_phase, speed);

    if let Some(osc) = obstacle.oscillation {
        let offset = osc.amplitude * (frame as f32 * OSC_FREQ + osc.phase).sin();
        // Never above the screen top, never into the ground
        obstacle.pos.y = (obstacle.base_y + offset).clamp(0.0, ground_y - obstacle.size.y);
    } else if obstacle.placement == Placement::Aerial {
        obstacle.pos.y = obstacle.base_y + hover_offset(frame, obstacle.hover_phase);
    }
}

/// Advance one pickup by one frame. Pickups always hover.
pub fn advance_pickup(pickup: &mut Pickup, frame: u64, speed: f32) {
    pickup.pos.x -= speed;
    pickup.wobble = wobble_angle(frame, pickup.wobble_phase, speed);
    pickup.pos.y = pickup.base_y + hover_offset(frame, pickup.hover_phase);
}

/// Whether an entity has scrolled far enough past the left edge to be
/// removed. The margin is generous so wobble never pops an entity out
/// while any part of it could still be visible.
pub fn is_offscreen(x: f32, width: f32) -> bool {
    x + width + OFFSCREEN_MARGIN < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ObstacleSkin, Oscillation};
    use glam::Vec2;

    fn grounded_obstacle(ground_y: f32) -> Obstacle {
        Obstacle {
            id: 1,
            pos: Vec2::new(800.0, ground_y - OBSTACLE_HEIGHT),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            base_y: ground_y - OBSTACLE_HEIGHT,
            skin: ObstacleSkin::Barrel,
            placement: Placement::Grounded,
            oscillation: None,
            hover_phase: 0.4,
            wobble_phase: 1.1,
            wobble: 0.0,
        }
    }

    #[test]
    fn everything_scrolls_left_at_live_speed() {
        let mut o = grounded_obstacle(480.0);
        let x0 = o.pos.x;
        advance_obstacle(&mut o, 10, 6.5, 480.0);
        assert!((o.pos.x - (x0 - 6.5)).abs() < 1e-6);
    }

    #[test]
    fn grounded_obstacle_stays_on_ground() {
        let ground_y = 480.0;
        let mut o = grounded_obstacle(ground_y);
        for frame in 0..200 {
            advance_obstacle(&mut o, frame, 5.0, ground_y);
            assert_eq!(o.pos.y, ground_y - OBSTACLE_HEIGHT);
        }
    }

    #[test]
    fn aerial_obstacle_hovers_around_spawn_height() {
        let ground_y = 480.0;
        let base_y = ground_y - AERIAL_CLEARANCE - OBSTACLE_HEIGHT;
        let mut o = grounded_obstacle(ground_y);
        o.placement = Placement::Aerial;
        o.base_y = base_y;
        o.pos.y = base_y;
        for frame in 0..200 {
            advance_obstacle(&mut o, frame, 5.0, ground_y);
            assert!((o.pos.y - base_y).abs() <= HOVER_AMPLITUDE + 1e-4);
        }
    }

    #[test]
    fn oscillation_overrides_hover_and_stays_clamped() {
        let ground_y = 480.0;
        let mut o = grounded_obstacle(ground_y);
        o.placement = Placement::Aerial;
        o.base_y = 40.0;
        o.oscillation = Some(Oscillation {
            phase: 0.0,
            amplitude: 200.0,
        });
        let mut saw_top_clamp = false;
        for frame in 0..500 {
            advance_obstacle(&mut o, frame, 5.0, ground_y);
            assert!(o.pos.y >= 0.0);
            assert!(o.pos.y <= ground_y - o.size.y);
            if o.pos.y == 0.0 {
                saw_top_clamp = true;
            }
        }
        // Amplitude deliberately exceeds the headroom above base_y
        assert!(saw_top_clamp);
    }

    #[test]
    fn wobble_scales_with_speed() {
        // Peak amplitude over a cycle should grow with speed
        let peak = |speed: f32| {
            (0u64..200)
                .map(|f| wobble_angle(f, 0.0, speed).abs())
                .fold(0.0f32, f32::max)
        };
        assert!(peak(20.0) > peak(5.0));
    }

    #[test]
    fn phases_desynchronize_entities() {
        let a = wobble_angle(17, 0.0, 5.0);
        let b = wobble_angle(17, 2.0, 5.0);
        assert_ne!(a, b);
    }

    #[test]
    fn pickup_hovers_and_scrolls() {
        let mut p = Pickup {
            id: 2,
            pos: Vec2::new(700.0, 300.0),
            size: Vec2::splat(PICKUP_SIZE),
            base_y: 300.0,
            tier: crate::sim::state::PickupTier::Common,
            hover_phase: 0.9,
            wobble_phase: 0.2,
            wobble: 0.0,
        };
        advance_pickup(&mut p, 25, 5.0);
        assert!(p.pos.x < 700.0);
        assert!((p.pos.y - p.base_y).abs() <= HOVER_AMPLITUDE);
    }

    #[test]
    fn offscreen_needs_margin_fully_passed() {
        assert!(!is_offscreen(-10.0, OBSTACLE_WIDTH));
        assert!(!is_offscreen(-(OBSTACLE_WIDTH + OFFSCREEN_MARGIN), OBSTACLE_WIDTH));
        assert!(is_offscreen(-(OBSTACLE_WIDTH + OFFSCREEN_MARGIN + 1.0), OBSTACLE_WIDTH));
    }
}
