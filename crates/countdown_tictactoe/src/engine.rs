//! Game engine: the single owner of all mutable game state.
//!
//! The engine processes one command at a time. Hosts must deliver human
//! input, AI triggers and timer ticks through one serialized stream.

use super::ai::{HeuristicAi, NoPause, SleepPause, ThinkingPause};
use super::board::Board;
use super::config::EngineConfig;
use super::error::{MoveError, UndoError};
use super::history::{History, HistorySnapshot};
use super::invariants::{EngineInvariants, InvariantSet};
use super::notifier::Notifier;
use super::position::Position;
use super::timer::{Tick, TimerState, TurnTimer};
use super::types::{GameStatus, Mode, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Immutable snapshot of everything a UI may read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Copy of the board.
    pub board: Board,
    /// Game status.
    pub status: GameStatus,
    /// Player to move.
    pub active: Player,
    /// Turn clock.
    pub timer: TimerState,
    /// Mode of the current game.
    pub mode: Mode,
    /// Number of undo snapshots stored.
    pub history_len: usize,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player who moved.
    pub mover: Player,
    /// Cell that was marked.
    pub position: Position,
    /// Status after the move.
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveOrigin {
    Human,
    Ai,
}

/// Countdown tic-tac-toe engine.
pub struct GameEngine {
    board: Board,
    active: Player,
    status: GameStatus,
    mode: Mode,
    history: History,
    timer: TurnTimer,
    ai: HeuristicAi,
    pause: Box<dyn ThinkingPause>,
    notifier: Box<dyn Notifier>,
}

impl GameEngine {
    /// Creates an engine with a fresh player-vs-player game already running.
    #[instrument(skip(notifier))]
    pub fn new(config: &EngineConfig, notifier: impl Notifier + 'static) -> Self {
        let pause: Box<dyn ThinkingPause> = if config.ai_thinking_delay().is_zero() {
            Box::new(NoPause)
        } else {
            Box::new(SleepPause(config.ai_thinking_delay()))
        };
        let mut engine = Self {
            board: Board::new(),
            active: Player::One,
            status: GameStatus::InProgress,
            mode: Mode::default(),
            history: History::new(),
            timer: TurnTimer::new(*config.turn_duration()),
            ai: HeuristicAi::from_seed(*config.ai_seed()),
            pause,
            notifier: Box::new(notifier),
        };
        engine.reset(Mode::default());
        engine
    }

    /// Replaces the AI thinking pause hook.
    pub fn with_pause(mut self, pause: impl ThinkingPause + 'static) -> Self {
        self.pause = Box::new(pause);
        self
    }

    /// Starts a new game in `mode`.
    ///
    /// Clears the board and history, hands the move to Player One and
    /// starts a full turn clock.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Mode) {
        self.board = Board::new();
        self.active = Player::One;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.mode = mode;
        self.timer.restart(true);
        info!(%mode, "New game started");
    }

    /// Plays a human move at `(row, col)` for the player to move.
    ///
    /// A history snapshot is pushed before the turn and occupancy checks,
    /// so rejected attempts still consume an undo slot.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` once the game has finished (nothing changes).
    /// - `MoveError::OutOfRange` for coordinates off the grid (nothing changes).
    /// - `MoveError::NotYourTurn` when the AI's seat is to move.
    /// - `MoveError::CellOccupied` when the cell already holds a mark.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        self.apply_move(row, col, MoveOrigin::Human)
    }

    /// Lets the AI play for seat Two.
    ///
    /// Runs [`begin_ai_turn`](Self::begin_ai_turn), the thinking pause hook
    /// and [`complete_ai_move`](Self::complete_ai_move) back to back. The
    /// clock restarts before the pause, so the pause is paid for out of the
    /// AI's own turn.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` once the game has finished.
    /// - `MoveError::NotYourTurn` outside player-vs-AI mode or when Player One
    ///   is to move.
    #[instrument(skip(self))]
    pub fn trigger_ai_move(&mut self) -> Result<MoveOutcome, MoveError> {
        self.begin_ai_turn()?;
        self.pause.pause(self.timer.state());
        self.complete_ai_move()
    }

    /// Opens the AI's turn by refilling its clock.
    ///
    /// Hosts that wait out the thinking delay themselves call this when the
    /// delay starts and [`complete_ai_move`](Self::complete_ai_move) when it
    /// ends, delivering ticks in between.
    ///
    /// # Errors
    ///
    /// Same as [`trigger_ai_move`](Self::trigger_ai_move).
    #[instrument(skip(self))]
    pub fn begin_ai_turn(&mut self) -> Result<(), MoveError> {
        self.ensure_ai_turn()?;
        self.timer.restart(true);
        debug!("AI turn started");
        Ok(())
    }

    /// Chooses and plays the AI's move without touching the clock first.
    ///
    /// # Errors
    ///
    /// Same as [`trigger_ai_move`](Self::trigger_ai_move).
    #[instrument(skip(self))]
    pub fn complete_ai_move(&mut self) -> Result<MoveOutcome, MoveError> {
        self.ensure_ai_turn()?;
        match self.ai.choose(&self.board, self.active) {
            Some(choice) => {
                self.apply_move(choice.position.row(), choice.position.col(), MoveOrigin::Ai)
            }
            // A full board has already ended the game.
            None => self.reject_move(MoveError::GameOver),
        }
    }

    /// Takes back the most recent snapshot (player-vs-player only).
    ///
    /// The turn clock restarts whether or not the undo is accepted.
    ///
    /// # Errors
    ///
    /// - `UndoError::Disallowed` in player-vs-AI mode.
    /// - `UndoError::EmptyHistory` when nothing was attempted since reset.
    #[instrument(skip(self), fields(history = self.history.len()))]
    pub fn undo(&mut self) -> Result<(), UndoError> {
        if self.mode == Mode::PlayerVsAi {
            self.restart_timer();
            return self.reject_undo(UndoError::Disallowed(self.mode));
        }

        let Some(snapshot) = self.history.pop() else {
            self.restart_timer();
            return self.reject_undo(UndoError::EmptyHistory);
        };

        let (board, active) = snapshot.into_parts();
        self.board = board;
        self.active = active;
        self.status = GameStatus::InProgress;
        self.timer.restart(true);
        debug!(active = %self.active, board = %self.board.display(), "Undo applied");
        self.assert_invariants();
        Ok(())
    }

    /// Delivers one clock tick.
    ///
    /// An expiry is handled inside the same call, so no other command can
    /// slip between the clock reaching zero and the timeout.
    pub fn tick(&mut self) -> Tick {
        let tick = self.timer.tick();
        if tick == Tick::Expired {
            self.on_timer_expired();
        }
        tick
    }

    /// Ends the game because the player on the clock ran out of time.
    ///
    /// Ignored once the game has finished.
    #[instrument(skip(self))]
    pub fn on_timer_expired(&mut self) {
        if self.status.is_finished() {
            debug!(status = %self.status, "Ignoring stale timer expiry");
            return;
        }
        let loser = self.active;
        self.status = GameStatus::TimedOut { loser };
        self.timer.cancel();
        info!(%loser, "Turn timer expired");
        self.notifier.on_timeout(loser);
    }

    /// True when the driver should call [`trigger_ai_move`](Self::trigger_ai_move).
    pub fn is_ai_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.mode.is_ai_seat(self.active)
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player to move.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Turn clock state.
    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    /// Mode of the current game.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of undo snapshots stored.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Snapshot of all observable state.
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.clone(),
            status: self.status,
            active: self.active,
            timer: self.timer.state(),
            mode: self.mode,
            history_len: self.history.len(),
        }
    }

    fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        origin: MoveOrigin,
    ) -> Result<MoveOutcome, MoveError> {
        if self.status.is_finished() {
            return self.reject_move(MoveError::GameOver);
        }
        if let Err(e) = Position::from_row_col(row, col) {
            return self.reject_move(e);
        }

        // Only human attempts are undoable; undo never runs against the AI.
        if origin == MoveOrigin::Human {
            self.history.push(HistorySnapshot::capture(&self.board, self.active));
            if self.mode.is_ai_seat(self.active) {
                return self.reject_move(MoveError::NotYourTurn(self.active));
            }
        }

        let mover = self.active;
        let position = match self.board.place(row, col, mover) {
            Ok(position) => position,
            Err(e) => return self.reject_move(e),
        };
        self.active = mover.opponent();
        self.timer.restart(true);
        debug!(%mover, %position, ?origin, board = %self.board.display(), "Move applied");

        self.evaluate(mover);
        self.assert_invariants();

        Ok(MoveOutcome {
            mover,
            position,
            status: self.status,
        })
    }

    fn evaluate(&mut self, mover: Player) {
        if let Some(won) = self.board.winning_line() {
            self.status = GameStatus::Won(mover);
            self.timer.cancel();
            info!(winner = %mover, line = ?won.line, "Game won");
            self.notifier.on_win(mover);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            self.timer.cancel();
            info!("Game drawn");
            self.notifier.on_draw();
        }
    }

    fn restart_timer(&mut self) {
        self.timer.restart(self.status == GameStatus::InProgress);
    }

    fn ensure_ai_turn(&mut self) -> Result<(), MoveError> {
        if self.status.is_finished() {
            return self.reject_move(MoveError::GameOver);
        }
        if !self.is_ai_turn() {
            return self.reject_move(MoveError::NotYourTurn(self.active));
        }
        Ok(())
    }

    fn reject_move<T>(&mut self, reason: MoveError) -> Result<T, MoveError> {
        warn!(%reason, "Move rejected");
        self.notifier.on_move_rejected(reason);
        Err(reason)
    }

    fn reject_undo(&mut self, reason: UndoError) -> Result<(), UndoError> {
        warn!(%reason, "Undo rejected");
        self.notifier.on_undo_rejected(reason);
        Err(reason)
    }

    fn assert_invariants(&self) {
        debug_assert!(
            EngineInvariants::check_all(&self.view()).is_ok(),
            "Engine invariants violated: {:?}",
            EngineInvariants::check_all(&self.view())
        );
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("active", &self.active)
            .field("status", &self.status)
            .field("mode", &self.mode)
            .field("history", &self.history.len())
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Notification, NullNotifier, RecordingNotifier};
    use std::sync::{Arc, Mutex};

    /// Pause hook that records the clock it was handed.
    #[derive(Clone, Default)]
    struct ClockRecordingPause {
        seen: Arc<Mutex<Vec<TimerState>>>,
    }

    impl ThinkingPause for ClockRecordingPause {
        fn pause(&mut self, clock: TimerState) {
            self.seen.lock().unwrap().push(clock);
        }
    }

    fn engine() -> (GameEngine, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let config = EngineConfig::default().with_ai_seed(5);
        (GameEngine::new(&config, notifier.clone()), notifier)
    }

    #[test]
    fn test_reset_state() {
        let (mut engine, _) = engine();
        engine.submit_move(0, 0).unwrap();
        engine.reset(Mode::PlayerVsPlayer);

        assert_eq!(engine.history_len(), 0);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.active_player(), Player::One);
        assert_eq!(
            engine.timer_state(),
            TimerState {
                remaining_units: 30,
                running: true
            }
        );
    }

    #[test]
    fn test_move_toggles_and_restarts_clock() {
        let (mut engine, _) = engine();
        engine.tick();
        engine.tick();
        let outcome = engine.submit_move(1, 1).unwrap();

        assert_eq!(outcome.mover, Player::One);
        assert_eq!(outcome.position, Position::Center);
        assert_eq!(engine.board().get(Position::Center), Cell::MarkA);
        assert_eq!(engine.active_player(), Player::Two);
        assert_eq!(engine.timer_state().remaining_units, 30);
    }

    #[test]
    fn test_out_of_range_changes_nothing() {
        let (mut engine, notifier) = engine();
        let before = engine.view();
        assert_eq!(
            engine.submit_move(3, 1),
            Err(MoveError::OutOfRange { row: 3, col: 1 })
        );
        assert_eq!(engine.view(), before);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::MoveRejected(MoveError::OutOfRange { row: 3, col: 1 })]
        );
    }

    #[test]
    fn test_human_cannot_play_ai_seat() {
        let (mut engine, notifier) = engine();
        engine.reset(Mode::PlayerVsAi);
        engine.submit_move(0, 0).unwrap();

        let before = engine.board().clone();
        assert_eq!(
            engine.submit_move(1, 1),
            Err(MoveError::NotYourTurn(Player::Two))
        );
        assert_eq!(engine.board(), &before);
        // The snapshot pushed before the turn check stays behind.
        assert_eq!(engine.history_len(), 2);
        assert!(
            notifier
                .notifications()
                .contains(&Notification::MoveRejected(MoveError::NotYourTurn(Player::Two)))
        );
    }

    #[test]
    fn test_ai_move_after_human_move() {
        let (mut engine, _) = engine();
        engine.reset(Mode::PlayerVsAi);
        engine.submit_move(0, 0).unwrap();
        assert!(engine.is_ai_turn());

        let outcome = engine.trigger_ai_move().unwrap();
        assert_eq!(outcome.mover, Player::Two);
        assert_eq!(outcome.position, Position::Center);
        assert_eq!(engine.active_player(), Player::One);
        assert!(!engine.is_ai_turn());
    }

    #[test]
    fn test_ai_clock_refilled_before_pause() {
        let pause = ClockRecordingPause::default();
        let config = EngineConfig::default().with_ai_seed(5);
        let mut engine = GameEngine::new(&config, NullNotifier).with_pause(pause.clone());
        engine.reset(Mode::PlayerVsAi);
        engine.submit_move(0, 0).unwrap();
        for _ in 0..4 {
            engine.tick();
        }
        assert_eq!(engine.timer_state().remaining_units, 26);

        engine.trigger_ai_move().unwrap();
        assert_eq!(
            *pause.seen.lock().unwrap(),
            vec![TimerState {
                remaining_units: 30,
                running: true
            }]
        );
    }

    #[test]
    fn test_split_ai_turn_charges_ticks_to_ai() {
        let (mut engine, _) = engine();
        engine.reset(Mode::PlayerVsAi);
        engine.submit_move(0, 0).unwrap();

        engine.begin_ai_turn().unwrap();
        engine.tick();
        assert_eq!(engine.timer_state().remaining_units, 29);
        assert_eq!(engine.board().occupied(), 1);

        let outcome = engine.complete_ai_move().unwrap();
        assert_eq!(outcome.mover, Player::Two);
        assert_eq!(engine.active_player(), Player::One);
        assert_eq!(engine.timer_state().remaining_units, 30);
    }

    #[test]
    fn test_ai_move_pushes_no_snapshot() {
        let (mut engine, _) = engine();
        engine.reset(Mode::PlayerVsAi);
        engine.submit_move(0, 0).unwrap();
        engine.trigger_ai_move().unwrap();
        assert_eq!(engine.history_len(), 1);
    }

    #[test]
    fn test_begin_ai_turn_rejected_on_human_turn() {
        let (mut engine, notifier) = engine();
        engine.reset(Mode::PlayerVsAi);
        engine.tick();
        assert_eq!(
            engine.begin_ai_turn(),
            Err(MoveError::NotYourTurn(Player::One))
        );
        assert_eq!(engine.timer_state().remaining_units, 29);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::MoveRejected(MoveError::NotYourTurn(Player::One))]
        );
    }

    #[test]
    fn test_ai_trigger_rejected_on_human_turn() {
        let (mut engine, _) = engine();
        engine.reset(Mode::PlayerVsAi);
        assert_eq!(
            engine.trigger_ai_move(),
            Err(MoveError::NotYourTurn(Player::One))
        );
        assert_eq!(engine.board().occupied(), 0);
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let (mut engine, _) = engine();
        engine.on_timer_expired();
        let before = engine.view();
        assert_eq!(engine.submit_move(0, 0), Err(MoveError::GameOver));
        assert_eq!(engine.view(), before);
    }

    #[test]
    fn test_undo_empty_history_restarts_clock() {
        let (mut engine, notifier) = engine();
        engine.tick();
        assert_eq!(engine.undo(), Err(UndoError::EmptyHistory));
        assert_eq!(engine.timer_state().remaining_units, 30);
        assert!(engine.timer_state().running);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::UndoRejected(UndoError::EmptyHistory)]
        );
    }

    #[test]
    fn test_undo_unfinishes_won_game() {
        let (mut engine, _) = engine();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.submit_move(row, col).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::Won(Player::One));
        assert!(!engine.timer_state().running);

        engine.undo().unwrap();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.active_player(), Player::One);
        assert!(engine.board().is_empty(Position::TopRight));
        assert!(engine.timer_state().running);
    }

    #[test]
    fn test_tick_expiry_times_out_player_on_clock() {
        let notifier = RecordingNotifier::new();
        let config = EngineConfig::default().with_turn_duration(2);
        let mut engine = GameEngine::new(&config, notifier.clone());
        engine.submit_move(0, 0).unwrap();

        assert_eq!(engine.tick(), Tick::Remaining(1));
        assert_eq!(engine.tick(), Tick::Expired);
        assert_eq!(engine.status(), GameStatus::TimedOut { loser: Player::Two });
        assert_eq!(engine.tick(), Tick::Idle);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::Timeout(Player::Two)]
        );
    }
}
