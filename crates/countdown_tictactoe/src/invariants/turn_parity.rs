//! Turn parity invariant: the side to move follows from the mark counts.

use super::super::engine::GameView;
use super::super::types::{Cell, Player};
use super::Invariant;

/// Invariant: Player One is to move exactly when both sides have equal marks.
pub struct TurnParityInvariant;

impl Invariant<GameView> for TurnParityInvariant {
    fn holds(view: &GameView) -> bool {
        let even = view.board.count(Cell::MarkA) == view.board.count(Cell::MarkB);
        (view.active == Player::One) == even
    }

    fn description() -> &'static str {
        "Player One is to move exactly when both players have placed equally many marks"
    }
}
