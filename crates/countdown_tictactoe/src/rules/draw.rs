//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (no empty cell remains).
///
/// A full board with no winning line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
