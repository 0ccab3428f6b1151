//! Countdown tic-tac-toe core.
//!
//! UI-independent game engine: board, win/draw detection, undo history,
//! a rule-based computer opponent and a per-turn countdown clock.
//!
//! # Architecture
//!
//! - **Board**: 3x3 cells plus line-scan queries
//! - **HeuristicAi**: fixed-priority move selector with a seedable RNG
//! - **TurnTimer**: countdown clock driven by external ticks
//! - **GameEngine**: owns everything above and the undo history; the only
//!   entry point for hosts
//!
//! # Example
//!
//! ```
//! use countdown_tictactoe::{EngineConfig, GameEngine, GameStatus, NullNotifier, Player};
//!
//! let mut engine = GameEngine::new(&EngineConfig::default(), NullNotifier);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     engine.submit_move(row, col).unwrap();
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::One));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod config;
mod engine;
mod error;
mod history;
pub mod invariants;
mod notifier;
mod position;
pub mod rules;
mod timer;
mod types;

pub use ai::{AiChoice, HeuristicAi, NoPause, Rule, SleepPause, ThinkingPause, completing_cell};
pub use board::Board;
pub use config::EngineConfig;
pub use engine::{GameEngine, GameView, MoveOutcome};
pub use error::{ConfigError, MoveError, UndoError};
pub use history::{History, HistorySnapshot};
pub use notifier::{Notification, Notifier, NullNotifier, RecordingNotifier};
pub use position::Position;
pub use rules::{Line, WinningLine};
pub use timer::{DEFAULT_TURN_UNITS, Tick, TimerState, TurnTimer};
pub use types::{Cell, GameStatus, Mode, Player};
