//! Per-frame simulation step
//!
//! Canonical frame order: progression (speed and distance from the
//! curves) -> player physics -> entity motion and off-screen retirement
//! -> spawn scheduling -> collision resolution -> particle advance.
//! Terminal state freezes everything except the particles, so the crash
//! burst still plays out on the game-over screen.

use super::state::{RunPhase, RunState};
use super::{collision, motion, progression, spawn};

/// Input latched by the host since the previous frame. Press/release are
/// one-shot: the wrapper clears them after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub jump_press: bool,
    pub jump_release: bool,
}

impl FrameInput {
    pub fn clear_one_shot(&mut self) {
        self.jump_press = false;
        self.jump_release = false;
    }
}

/// Advance the run by one frame.
pub fn tick(state: &mut RunState, input: &FrameInput) {
    if state.phase == RunPhase::GameOver {
        state.particles.advance();
        return;
    }

    state.frame += 1;

    // Progression: current speed from distance, then accumulate distance
    state.speed = progression::speed(state.distance_m);
    state.distance_m += progression::distance_step(state.speed);

    // Player physics
    if input.jump_press {
        state.player.jump();
    }
    if input.jump_release {
        state.player.cut_jump();
    }
    let ground_y = state.ground_y();
    state.player.step(ground_y);

    // Entity motion, then retire anything fully past the left edge
    let frame = state.frame;
    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        motion::advance_obstacle(obstacle, frame, speed, ground_y);
    }
    state
        .obstacles
        .retain(|o| !motion::is_offscreen(o.pos.x, o.size.x));
    for pickup in &mut state.pickups {
        motion::advance_pickup(pickup, frame, speed);
    }
    state
        .pickups
        .retain(|p| !motion::is_offscreen(p.pos.x, p.size.x));

    spawn::spawn_entities(state);
    collision::resolve_collisions(state);
    state.particles.advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Obstacle, ObstacleSkin, Placement};
    use glam::Vec2;

    fn test_state() -> RunState {
        RunState::new(99, DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT, 0)
    }

    #[test]
    fn distance_and_frame_accumulate() {
        let mut state = test_state();
        let input = FrameInput::default();
        tick(&mut state, &input);
        assert_eq!(state.frame, 1);
        assert!((state.distance_m - BASE_SPEED / DISTANCE_DIVISOR).abs() < 1e-6);
        let d1 = state.distance_m;
        tick(&mut state, &input);
        assert!(state.distance_m > d1);
    }

    #[test]
    fn zero_gap_obstacle_is_terminal_next_frame() {
        let mut state = test_state();
        let player_box = state.player.aabb();
        // Touching the player's right edge: not yet a collision, but the
        // next frame's scroll closes the gap
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(player_box.right, state.ground_y() - OBSTACLE_HEIGHT),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            base_y: state.ground_y() - OBSTACLE_HEIGHT,
            skin: ObstacleSkin::Crate,
            placement: Placement::Grounded,
            oscillation: None,
            hover_phase: 0.0,
            wobble_phase: 0.0,
            wobble: 0.0,
        });

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.phase, RunPhase::GameOver);
    }

    #[test]
    fn terminal_state_freezes_progress_and_physics() {
        let mut state = test_state();
        state.phase = RunPhase::GameOver;
        state.player.vel_y = -5.0;
        let frame = state.frame;
        let distance = state.distance_m;
        let player_y = state.player.pos.y;

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.frame, frame);
        assert_eq!(state.distance_m, distance);
        assert_eq!(state.player.pos.y, player_y);
    }

    #[test]
    fn particles_keep_playing_after_terminal() {
        let mut state = test_state();
        state.particles.spawn_burst(
            Vec2::new(100.0, 100.0),
            crate::sim::Color::PLAYER,
            5,
            3,
            (1.0, 2.0),
            &mut state.rng,
        );
        state.phase = RunPhase::GameOver;
        for _ in 0..3 {
            tick(&mut state, &FrameInput::default());
        }
        assert_eq!(state.particles.live_count(), 0);
        assert_eq!(state.particles.pool_count(), 5);
    }

    #[test]
    fn jump_press_lifts_the_player() {
        let mut state = test_state();
        let input = FrameInput {
            jump_press: true,
            jump_release: false,
        };
        tick(&mut state, &input);
        assert!(!state.player.grounded);
        assert!(state.player.vel_y < 0.0);
    }

    #[test]
    fn early_release_shortens_the_jump() {
        let apex = |cut_at: Option<u64>| {
            let mut state = test_state();
            let mut input = FrameInput {
                jump_press: true,
                jump_release: false,
            };
            let mut highest = f32::MAX;
            for frame in 0..120 {
                tick(&mut state, &input);
                input.clear_one_shot();
                if cut_at == Some(frame) {
                    input.jump_release = true;
                }
                highest = highest.min(state.player.pos.y);
            }
            highest
        };
        let full_jump = apex(None);
        let cut_jump = apex(Some(2));
        // Smaller y means higher on screen
        assert!(cut_jump > full_jump);
    }

    #[test]
    fn offscreen_entities_are_retired() {
        let mut state = test_state();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(-OFFSCREEN_MARGIN - OBSTACLE_WIDTH, state.ground_y() - OBSTACLE_HEIGHT),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            base_y: state.ground_y() - OBSTACLE_HEIGHT,
            skin: ObstacleSkin::Barrel,
            placement: Placement::Grounded,
            oscillation: None,
            hover_phase: 0.0,
            wobble_phase: 0.0,
            wobble: 0.0,
        });
        tick(&mut state, &FrameInput::default());
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn runs_are_deterministic_for_a_seed() {
        let run = || {
            let mut state = RunState::new(7777, DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT, 0);
            let mut input = FrameInput::default();
            for frame in 0..2000u64 {
                input.jump_press = frame % 50 == 0;
                input.jump_release = frame % 50 == 20;
                tick(&mut state, &input);
            }
            (
                state.frame,
                state.distance_m,
                state.score,
                state.obstacles.len(),
                state.pickups.len(),
                state.phase,
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn standing_still_eventually_ends_the_run() {
        let mut state = test_state();
        let input = FrameInput::default();
        for _ in 0..5000 {
            tick(&mut state, &input);
            if state.phase == RunPhase::GameOver {
                return;
            }
        }
        panic!("no obstacle ever reached the idle player");
    }
}
