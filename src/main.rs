//! Rooftop Run entry point
//!
//! The web build exposes a `Game` handle to the host page: the page owns
//! the canvas, requestAnimationFrame, and input listeners, and calls back
//! into the handle once per frame, drawing from JSON snapshots. The
//! native build runs a short headless demo run for profiling and sanity
//! checks.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use rooftop_run::consts::*;
    use rooftop_run::sim::{FrameInput, RunPhase, RunState, tick};
    use rooftop_run::{HighScore, Settings};

    /// Game instance handed to the host page.
    #[wasm_bindgen]
    pub struct Game {
        state: RunState,
        input: FrameInput,
        settings: Settings,
        high: HighScore,
        was_running: bool,
    }

    #[wasm_bindgen]
    impl Game {
        #[wasm_bindgen(constructor)]
        pub fn new(width: f32, height: f32) -> Game {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let settings = Settings::load();
            let high = HighScore::load();
            let seed = js_sys::Date::now() as u64;
            let width = if width > 0.0 { width } else { DEFAULT_VIEW_WIDTH };
            let height = if height > 0.0 { height } else { DEFAULT_VIEW_HEIGHT };
            log::info!("Rooftop Run starting, seed {}", seed);

            Game {
                state: RunState::new(seed, width, height, high.best()),
                input: FrameInput::default(),
                settings,
                high,
                was_running: true,
            }
        }

        /// Advance the simulation by exactly one frame.
        pub fn on_frame_tick(&mut self) {
            tick(&mut self.state, &self.input);
            self.input.clear_one_shot();

            // Persist the record at the terminal transition; a failed
            // save only costs the stored copy, not the in-memory best
            if self.was_running && self.state.phase == RunPhase::GameOver {
                if self.high.record(self.state.score) {
                    self.high.save();
                }
                self.was_running = false;
            }
        }

        pub fn on_jump_press(&mut self) {
            self.input.jump_press = true;
        }

        pub fn on_jump_release(&mut self) {
            self.input.jump_release = true;
        }

        pub fn on_resize(&mut self, width: f32, height: f32) {
            self.state.handle_resize(width, height);
        }

        pub fn on_restart_request(&mut self) {
            let seed = js_sys::Date::now() as u64;
            self.state.reset(seed);
            self.was_running = true;
            log::info!("run restarted, seed {}", seed);
        }

        /// JSON snapshot of everything the host needs to draw this frame.
        pub fn snapshot_json(&self) -> String {
            let budget = if self.settings.effective_particles() {
                self.settings.preset.max_particles()
            } else {
                0
            };
            serde_json::to_string(&self.state.snapshot(budget)).unwrap_or_else(|e| {
                log::warn!("snapshot serialization failed: {}", e);
                String::from("{}")
            })
        }

        pub fn score(&self) -> u32 {
            self.state.score
        }

        pub fn high_score(&self) -> u32 {
            self.state.high_score
        }

        pub fn distance(&self) -> f32 {
            self.state.distance_m
        }

        pub fn is_game_over(&self) -> bool {
            self.state.phase == RunPhase::GameOver
        }

        pub fn set_reduced_motion(&mut self, on: bool) {
            self.settings.reduced_motion = on;
            self.settings.save();
        }

        pub fn set_particles(&mut self, on: bool) {
            self.settings.particles = on;
            self.settings.save();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rooftop_run::consts::*;
    use rooftop_run::sim::{FrameInput, RunPhase, RunState, tick};

    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    log::info!("Rooftop Run (native) headless demo, seed {}", seed);

    let mut state = RunState::new(seed, DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT, 0);
    let mut input = FrameInput::default();
    for frame in 0..20_000u64 {
        // A crude metronome jumper; it survives a while, not forever
        input.jump_press = frame % 45 == 0;
        input.jump_release = frame % 45 == 12;
        tick(&mut state, &input);
        input.clear_one_shot();
        if state.phase == RunPhase::GameOver {
            break;
        }
    }

    println!(
        "demo run: {:.0}m in {} frames, score {}",
        state.distance_m, state.frame, state.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the exported Game handle; nothing to run here
}
