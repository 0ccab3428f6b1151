//! Outcome notifications from the engine to its host.

use super::error::{MoveError, UndoError};
use super::types::Player;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Receiver of engine notifications.
///
/// At most one of `on_win`, `on_draw` and `on_timeout` fires per
/// transition into a finished status. All methods default to no-ops.
pub trait Notifier: Send {
    /// A player completed a line.
    fn on_win(&mut self, _winner: Player) {}

    /// The board filled with no winner.
    fn on_draw(&mut self) {}

    /// The player on the clock ran out of time.
    fn on_timeout(&mut self, _loser: Player) {}

    /// A move was rejected.
    fn on_move_rejected(&mut self, _reason: MoveError) {}

    /// An undo request was rejected.
    fn on_undo_rejected(&mut self, _reason: UndoError) {}
}

/// A notifier callback as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// See [`Notifier::on_win`].
    Win(Player),
    /// See [`Notifier::on_draw`].
    Draw,
    /// See [`Notifier::on_timeout`].
    Timeout(Player),
    /// See [`Notifier::on_move_rejected`].
    MoveRejected(MoveError),
    /// See [`Notifier::on_undo_rejected`].
    UndoRejected(UndoError),
}

impl Notification {
    /// Returns true for win, draw and timeout notifications.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Notification::Win(_) | Notification::Draw | Notification::Timeout(_)
        )
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::Win(player) => write!(f, "{} is the winner!", player),
            Notification::Draw => write!(f, "It's a draw!"),
            Notification::Timeout(loser) => {
                write!(f, "{} ran out of time, {} wins!", loser, loser.opponent())
            }
            Notification::MoveRejected(reason) => write!(f, "{}", reason),
            Notification::UndoRejected(reason) => write!(f, "{}", reason),
        }
    }
}

/// Notifier that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {}

/// Cloneable notifier that records every callback in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies out everything recorded so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.log
            .lock()
            .map(|mut log| std::mem::take(&mut *log))
            .unwrap_or_default()
    }

    fn record(&mut self, notification: Notification) {
        if let Ok(mut log) = self.log.lock() {
            log.push(notification);
        }
    }
}

impl Notifier for RecordingNotifier {
    fn on_win(&mut self, winner: Player) {
        self.record(Notification::Win(winner));
    }

    fn on_draw(&mut self) {
        self.record(Notification::Draw);
    }

    fn on_timeout(&mut self, loser: Player) {
        self.record(Notification::Timeout(loser));
    }

    fn on_move_rejected(&mut self, reason: MoveError) {
        self.record(Notification::MoveRejected(reason));
    }

    fn on_undo_rejected(&mut self, reason: UndoError) {
        self.record(Notification::UndoRejected(reason));
    }
}
