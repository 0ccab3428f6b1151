//! Per-turn countdown clock.
//!
//! The timer knows nothing about game rules. The engine decides when to
//! restart or cancel it and feeds it ticks from the serialized event stream.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default turn length in countdown units (one unit = one second).
pub const DEFAULT_TURN_UNITS: u32 = 30;

/// Observable clock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Units left on the clock.
    pub remaining_units: u32,
    /// Whether ticks currently count down.
    pub running: bool,
}

/// Result of delivering one tick to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timer was not running; nothing changed.
    Idle,
    /// One unit elapsed; carries the new remaining value.
    Remaining(u32),
    /// The clock reached zero and stopped itself.
    Expired,
}

/// Countdown clock with start/cancel/tick semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTimer {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl TurnTimer {
    /// Creates a stopped timer holding a full duration.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    /// Starts counting down from the current remaining value.
    ///
    /// When the owning game has already finished the clock is reset to a
    /// full duration and left stopped instead.
    #[instrument(skip(self), fields(remaining = self.remaining))]
    pub fn start(&mut self, game_in_progress: bool) {
        if game_in_progress {
            self.running = true;
        } else {
            self.remaining = self.duration;
            self.running = false;
        }
    }

    /// Refills the clock to a full duration, then [`start`](Self::start)s it.
    pub fn restart(&mut self, game_in_progress: bool) {
        self.remaining = self.duration;
        self.start(game_in_progress);
    }

    /// Stops ticking. Calling it on a stopped timer does nothing.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Advances the clock by one unit.
    ///
    /// Reaching zero reports [`Tick::Expired`] exactly once: the timer stops
    /// itself, so later ticks are [`Tick::Idle`].
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            debug!("Turn timer expired");
            Tick::Expired
        } else {
            Tick::Remaining(self.remaining)
        }
    }

    /// Current observable state.
    pub fn state(&self) -> TimerState {
        TimerState {
            remaining_units: self.remaining,
            running: self.running,
        }
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_UNITS)
    }
}
