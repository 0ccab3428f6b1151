//! Heuristic AI policy checks against hand-built boards.

use countdown_tictactoe::{
    Board, EngineConfig, GameEngine, GameStatus, HeuristicAi, Mode, NullNotifier, Player,
    Position, Rule, rules::LINES,
};

fn board_from(moves: &[(usize, usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(row, col, player) in moves {
        board.place(row, col, player).expect("free cell");
    }
    board
}

#[test]
fn test_win_first_on_every_line() {
    // Two AI marks on a line plus opponent marks elsewhere: the gap wins.
    for line in LINES {
        for gap in 0..3 {
            let mut board = Board::new();
            for (i, pos) in line.iter().enumerate() {
                if i != gap {
                    board.place(pos.row(), pos.col(), Player::Two).unwrap();
                }
            }
            for pos in Position::ALL
                .into_iter()
                .filter(|pos| !line.contains(pos))
                .take(2)
            {
                board.place(pos.row(), pos.col(), Player::One).unwrap();
            }

            for seed in 0..5 {
                let choice = HeuristicAi::seeded(seed)
                    .choose(&board, Player::Two)
                    .expect("board has free cells");
                assert_eq!(choice.rule, Rule::Win, "line {:?} gap {}", line, gap);
                assert_eq!(choice.position, line[gap], "line {:?} gap {}", line, gap);
            }
        }
    }
}

#[test]
fn test_block_uses_scan_order() {
    // One threatens both row 0 (gap TopRight) and column 0 (gap BottomLeft).
    let board = board_from(&[
        (0, 0, Player::One),
        (0, 1, Player::One),
        (1, 0, Player::One),
        (1, 1, Player::Two),
        (2, 2, Player::Two),
    ]);
    let choice = HeuristicAi::seeded(0).choose(&board, Player::Two).unwrap();
    // Two's own diagonal is blocked by One at TopLeft, so this is a block.
    assert_eq!(choice.rule, Rule::Block);
    assert_eq!(choice.position, Position::TopRight);
}

#[test]
fn test_self_play_always_finishes() {
    for seed in 0..25 {
        let config = EngineConfig::default().with_ai_seed(seed);
        let mut engine = GameEngine::new(&config, NullNotifier);
        engine.reset(Mode::PlayerVsAi);
        let mut human = HeuristicAi::seeded(seed + 1000);

        while engine.status() == GameStatus::InProgress {
            if engine.is_ai_turn() {
                engine.trigger_ai_move().expect("ai move");
            } else {
                let choice = human
                    .choose(engine.board(), Player::One)
                    .expect("free cell");
                engine
                    .submit_move(choice.position.row(), choice.position.col())
                    .expect("human move");
            }
        }
        assert!(engine.status().is_finished());
    }
}
