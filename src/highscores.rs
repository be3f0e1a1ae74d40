//! Persisted best score
//!
//! A single integer, stored in LocalStorage on the web build. Storage
//! failures are logged and degrade to "no record" / "save skipped" -
//! they never reach game state.

use serde::{Deserialize, Serialize};

/// The player's best score across runs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rooftop_run_highscore";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a score; returns true when it beats the stored best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(high) = serde_json::from_str::<HighScore>(&json) {
                    log::info!("Loaded high score: {}", high.best);
                    return high;
                }
                log::warn!("High score entry was malformed, starting fresh");
            }
        }

        log::info!("No high score found, starting fresh");
        Self::new()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, high score save skipped");
            return;
        };
        if let Ok(json) = serde_json::to_string(self) {
            match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("High score saved: {}", self.best),
                Err(_) => log::warn!("High score save failed, keeping in-memory value"),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
