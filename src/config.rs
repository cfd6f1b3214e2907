use serde::{Deserialize, Serialize};

use crate::constants::{INITIAL_SPEED_MS, MIN_SPEED_MS, SPEED_DECREMENT_MS, SWIPE_MIN_DISTANCE};

/// Speed curve and gesture tuning handed to the engine and input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub initial_speed_ms: u32,
    pub speed_decrement_ms: u32,
    pub min_speed_ms: u32,
    pub swipe_min_distance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_speed_ms: INITIAL_SPEED_MS,
            speed_decrement_ms: SPEED_DECREMENT_MS,
            min_speed_ms: MIN_SPEED_MS,
            swipe_min_distance: SWIPE_MIN_DISTANCE,
        }
    }
}

impl GameConfig {
    /// Tick interval after eating one more bamboo at `speed_ms`.
    pub fn next_speed(&self, speed_ms: u32) -> u32 {
        speed_ms
            .saturating_sub(self.speed_decrement_ms)
            .max(self.min_speed_ms)
    }
}
