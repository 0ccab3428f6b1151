//! Undo history: a stack of immutable board snapshots.

use super::board::Board;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Board and side to move, captured before a move attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    board: Board,
    active: Player,
}

impl HistorySnapshot {
    /// Captures a deep copy of `board` together with the side to move.
    pub fn capture(board: &Board, active: Player) -> Self {
        Self {
            board: board.clone(),
            active,
        }
    }

    /// The captured board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who was to move.
    pub fn active(&self) -> Player {
        self.active
    }

    /// Consumes the snapshot, returning its parts.
    pub fn into_parts(self) -> (Board, Player) {
        (self.board, self.active)
    }
}

/// Index-addressed stack of snapshots, most recent last.
///
/// One entry per move *attempt* since the last reset, including attempts
/// that were rejected after the snapshot was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<HistorySnapshot>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a snapshot.
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Pops the most recent snapshot.
    pub fn pop(&mut self) -> Option<HistorySnapshot> {
        self.snapshots.pop()
    }

    /// Snapshot at `index` (0 is the oldest).
    pub fn get(&self, index: usize) -> Option<&HistorySnapshot> {
        self.snapshots.get(index)
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
