//! End-to-end game scenarios through the public engine API.

use countdown_tictactoe::{
    Board, Cell, EngineConfig, GameEngine, GameStatus, Mode, MoveError, Notification, Player,
    Position, RecordingNotifier, TimerState, UndoError,
};

fn new_engine() -> (GameEngine, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let config = EngineConfig::default().with_ai_seed(2024);
    (GameEngine::new(&config, notifier.clone()), notifier)
}

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        engine.submit_move(row, col).expect("legal move");
    }
}

#[test]
fn test_row_zero_win() {
    let (mut engine, notifier) = new_engine();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(engine.status(), GameStatus::Won(Player::One));
    let line = engine.board().winning_line().expect("completed line");
    assert_eq!(
        line.line,
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert!(!engine.timer_state().running);
    assert_eq!(notifier.notifications(), vec![Notification::Win(Player::One)]);
}

#[test]
fn test_full_board_draw() {
    // Final layout: A B A / A B B / B A A
    let (mut engine, notifier) = new_engine();
    play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.board().cell(2, 2), Ok(Cell::MarkA));
    assert_eq!(notifier.notifications(), vec![Notification::Draw]);
}

#[test]
fn test_marks_equal_accepted_moves() {
    let (mut engine, _) = new_engine();
    let attempts = [(0, 0), (0, 0), (1, 1), (5, 5), (1, 1), (2, 2)];
    let mut accepted = 0;
    for (row, col) in attempts {
        if engine.submit_move(row, col).is_ok() {
            accepted += 1;
        }
        assert_eq!(engine.board().occupied(), accepted);
    }
    assert_eq!(accepted, 3);
}

#[test]
fn test_occupied_cell_changes_nothing_but_history() {
    let (mut engine, notifier) = new_engine();
    play(&mut engine, &[(1, 1)]);
    let before = engine.view();

    assert_eq!(
        engine.submit_move(1, 1),
        Err(MoveError::CellOccupied(Position::Center))
    );

    let after = engine.view();
    assert_eq!(after.board, before.board);
    assert_eq!(after.active, before.active);
    assert_eq!(after.status, before.status);
    assert_eq!(after.history_len, before.history_len + 1);
    assert_eq!(
        notifier.notifications(),
        vec![Notification::MoveRejected(MoveError::CellOccupied(
            Position::Center
        ))]
    );
}

#[test]
fn test_reset_player_vs_player() {
    let (mut engine, _) = new_engine();
    play(&mut engine, &[(0, 0), (2, 2)]);
    engine.reset(Mode::PlayerVsPlayer);

    let view = engine.view();
    assert_eq!(view.history_len, 0);
    assert_eq!(view.status, GameStatus::InProgress);
    assert_eq!(
        view.timer,
        TimerState {
            remaining_units: 30,
            running: true
        }
    );
    assert_eq!(view.active, Player::One);
    assert_eq!(view.board, Board::new());
    assert_eq!(view.mode, Mode::PlayerVsPlayer);
}

#[test]
fn test_undo_single_move() {
    let (mut engine, _) = new_engine();
    play(&mut engine, &[(2, 1)]);

    engine.undo().expect("undo in PvP");
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.active_player(), Player::One);
    assert_eq!(engine.history_len(), 0);
}

#[test]
fn test_undo_after_rejected_attempt_restores_same_position() {
    let (mut engine, _) = new_engine();
    play(&mut engine, &[(0, 0)]);
    assert!(engine.submit_move(0, 0).is_err());

    // First undo consumes the wasted snapshot, second takes the move back.
    engine.undo().expect("first undo");
    assert_eq!(engine.board().occupied(), 1);
    assert_eq!(engine.active_player(), Player::Two);
    engine.undo().expect("second undo");
    assert_eq!(engine.board().occupied(), 0);
    assert_eq!(engine.active_player(), Player::One);
}

#[test]
fn test_undo_disallowed_against_ai() {
    let (mut engine, notifier) = new_engine();
    engine.reset(Mode::PlayerVsAi);
    play(&mut engine, &[(0, 0)]);
    engine.trigger_ai_move().expect("ai move");
    engine.tick();
    let before = engine.view();

    assert_eq!(
        engine.undo(),
        Err(UndoError::Disallowed(Mode::PlayerVsAi))
    );

    let after = engine.view();
    assert_eq!(after.board, before.board);
    assert_eq!(after.status, before.status);
    assert_eq!(after.active, before.active);
    assert_eq!(after.timer.remaining_units, 30);
    assert_eq!(
        notifier.drain().last(),
        Some(&Notification::UndoRejected(UndoError::Disallowed(
            Mode::PlayerVsAi
        )))
    );
}

#[test]
fn test_timer_expiry_while_in_progress() {
    let (mut engine, notifier) = new_engine();
    play(&mut engine, &[(1, 1)]);
    let on_clock = engine.active_player();

    engine.on_timer_expired();

    assert_eq!(engine.status(), GameStatus::TimedOut { loser: on_clock });
    assert_eq!(engine.status().winner(), Some(on_clock.opponent()));
    assert!(!engine.timer_state().running);
    assert_eq!(notifier.notifications(), vec![Notification::Timeout(on_clock)]);
}

#[test]
fn test_timer_expiry_after_finish_is_noop() {
    let (mut engine, notifier) = new_engine();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let before = engine.view();

    engine.on_timer_expired();

    assert_eq!(engine.view(), before);
    assert_eq!(notifier.notifications(), vec![Notification::Win(Player::One)]);
}

#[test]
fn test_one_terminal_notification_per_game() {
    let (mut engine, notifier) = new_engine();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let _ = engine.submit_move(2, 0);
    engine.on_timer_expired();

    let terminal = notifier
        .notifications()
        .into_iter()
        .filter(Notification::is_terminal)
        .count();
    assert_eq!(terminal, 1);
}
