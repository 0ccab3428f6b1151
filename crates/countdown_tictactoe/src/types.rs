//! Core domain types for countdown tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player One (moves first, plays MarkA).
    #[strum(to_string = "Player 1")]
    One,
    /// Player Two (human or AI-controlled, plays MarkB).
    #[strum(to_string = "Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the mark this player puts on the board.
    pub fn mark(self) -> Cell {
        match self {
            Player::One => Cell::MarkA,
            Player::Two => Cell::MarkB,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Player One's mark.
    MarkA,
    /// Player Two's mark.
    MarkB,
}

impl Cell {
    /// Returns the player owning this mark, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkA => Some(Player::One),
            Cell::MarkB => Some(Player::Two),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::MarkA => 'O',
            Cell::MarkB => 'X',
        }
    }
}

/// Who sits in seat Two for the lifetime of one game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[strum(to_string = "PvP")]
    PlayerVsPlayer,
    /// Seat Two is driven by the heuristic AI.
    #[strum(to_string = "PvAI")]
    PlayerVsAi,
}

impl Mode {
    /// Returns true if `player` is controlled by the AI in this mode.
    pub fn is_ai_seat(self, player: Player) -> bool {
        self == Mode::PlayerVsAi && player == Player::Two
    }
}

/// Current status of the game.
///
/// Once the status leaves `InProgress` no board mutation is accepted
/// until the engine is reset (or an undo restores an earlier position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row.
    Won(Player),
    /// Board filled with no winner.
    Draw,
    /// The turn clock ran out; the player who was on the clock loses.
    TimedOut {
        /// Player whose turn expired.
        loser: Player,
    },
}

impl GameStatus {
    /// Returns true once the game has reached any terminal status.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if the game produced one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::TimedOut { loser } => Some(loser.opponent()),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::TimedOut { loser } => write!(f, "{} ran out of time", loser),
        }
    }
}
