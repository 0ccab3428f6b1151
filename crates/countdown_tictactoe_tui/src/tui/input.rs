//! Keyboard mapping.

use countdown_tictactoe::{Mode, Position};
use crossterm::event::KeyCode;

/// What a key press means to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the cursor.
    Cursor(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell directly (keys 1-9).
    Play(Position),
    /// Take back a move.
    Undo,
    /// New game in the current mode.
    Restart,
    /// New game in a given mode.
    NewGame(Mode),
    /// Leave the app.
    Quit,
}

/// Maps a key to an input, given the current cursor.
pub fn map_key(key: KeyCode, cursor: Position) -> Option<Input> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Input::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Input::Play),
        KeyCode::Char('u') => Some(Input::Undo),
        KeyCode::Char('r') => Some(Input::Restart),
        KeyCode::Char('p') => Some(Input::NewGame(Mode::PlayerVsPlayer)),
        KeyCode::Char('a') => Some(Input::NewGame(Mode::PlayerVsAi)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_map_to_cells() {
        assert_eq!(
            map_key(KeyCode::Char('1'), Position::Center),
            Some(Input::Play(Position::TopLeft))
        );
        assert_eq!(
            map_key(KeyCode::Char('9'), Position::Center),
            Some(Input::Play(Position::BottomRight))
        );
        assert_eq!(map_key(KeyCode::Char('0'), Position::Center), None);
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(
            map_key(KeyCode::Char('a'), Position::Center),
            Some(Input::NewGame(Mode::PlayerVsAi))
        );
        assert_eq!(map_key(KeyCode::Char('u'), Position::Center), Some(Input::Undo));
    }
}
