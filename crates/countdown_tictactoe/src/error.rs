//! Error types for rejected commands.
//!
//! Every condition here is local and recoverable: a rejection leaves the
//! engine in a playable state.

use super::position::Position;
use super::types::{Mode, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Reasons a move can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// Human input arrived for the seat the AI controls.
    #[display("It's not {}'s turn to be played by hand", _0)]
    NotYourTurn(Player),
}

impl std::error::Error for MoveError {}

/// Reasons an undo request can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum UndoError {
    /// Undo only exists for two human players.
    #[display("Undo is disallowed in {} mode", _0)]
    Disallowed(Mode),

    /// Nothing has been played since the last reset.
    #[display("Nothing to undo")]
    EmptyHistory,
}

impl std::error::Error for UndoError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
