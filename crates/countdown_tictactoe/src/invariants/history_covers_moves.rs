//! History coverage invariant: every human mark on the board can be undone.

use super::super::engine::GameView;
use super::super::types::{Cell, Mode};
use super::Invariant;

/// Invariant: history holds at least one snapshot per human-placed mark.
///
/// Rejected attempts also push snapshots, so the history may be longer
/// than the number of marks, never shorter. AI moves push nothing.
pub struct HistoryCoversMovesInvariant;

impl Invariant<GameView> for HistoryCoversMovesInvariant {
    fn holds(view: &GameView) -> bool {
        let human_marks = match view.mode {
            Mode::PlayerVsPlayer => view.board.occupied(),
            Mode::PlayerVsAi => view.board.count(Cell::MarkA),
        };
        view.history_len >= human_marks
    }

    fn description() -> &'static str {
        "History holds at least one snapshot per human-placed mark"
    }
}
