//! Engine configuration.

use super::timer::DEFAULT_TURN_UNITS;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for one [`GameEngine`](super::GameEngine).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Turn length in countdown units.
    turn_duration: u32,

    /// Seed for the AI's tie-breaking RNG; OS entropy when absent.
    #[setters(strip_option)]
    ai_seed: Option<u64>,

    /// Cosmetic pause before the AI decides, in milliseconds.
    ai_thinking_ms: u64,
}

impl EngineConfig {
    /// The AI thinking delay as a [`Duration`].
    pub fn ai_thinking_delay(&self) -> Duration {
        Duration::from_millis(self.ai_thinking_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_duration: DEFAULT_TURN_UNITS,
            ai_seed: None,
            ai_thinking_ms: 0,
        }
    }
}
