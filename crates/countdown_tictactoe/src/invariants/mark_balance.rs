//! Mark balance invariant: Player One is never behind and never two ahead.

use super::super::engine::GameView;
use super::super::types::Cell;
use super::Invariant;

/// Invariant: `count(MarkA) - count(MarkB)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameView> for MarkBalanceInvariant {
    fn holds(view: &GameView) -> bool {
        let a = view.board.count(Cell::MarkA);
        let b = view.board.count(Cell::MarkB);
        a == b || a == b + 1
    }

    fn description() -> &'static str {
        "Player One has the same number of marks as Player Two, or one more"
    }
}
