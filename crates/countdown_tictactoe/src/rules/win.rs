//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::lines::{LINES, Line};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// The three positions of the line.
    pub line: Line,
    /// Owner of the three marks.
    pub winner: Player,
}

/// Returns the first line (in [`LINES`] order) holding three equal marks.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let cell = board.get(a);
        if cell == board.get(b) && cell == board.get(c) {
            cell.owner().map(|winner| WinningLine { line, winner })
        } else {
            None
        }
    })
}
