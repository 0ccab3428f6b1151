//! Application state and logic.

use super::input::Input;
use countdown_tictactoe::{GameStatus, GameView, Mode, Notification, Position};
use countdown_tictactoe_tui::{Command, DriverEvent};
use tracing::debug;

/// Main application state.
pub struct App {
    view: Option<GameView>,
    cursor: Position,
    notice: Option<Notification>,
    turn_units: u32,
    should_quit: bool,
}

impl App {
    /// Creates a new application for turns of `turn_units` seconds.
    pub fn new(turn_units: u32) -> Self {
        Self {
            view: None,
            cursor: Position::Center,
            notice: None,
            turn_units,
            should_quit: false,
        }
    }

    /// Full turn length, for scaling the clock.
    pub fn turn_units(&self) -> u32 {
        self.turn_units
    }

    /// Latest engine view, once the driver has published one.
    pub fn view(&self) -> Option<&GameView> {
        self.view.as_ref()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles an event from the driver.
    pub fn handle_event(&mut self, event: DriverEvent) {
        match event {
            DriverEvent::View(view) => {
                self.view = Some(view);
            }
            DriverEvent::Notice(notice) => {
                debug!(%notice, "Notification");
                self.notice = Some(notice);
            }
        }
    }

    /// Applies user input, returning a command for the driver if any.
    pub fn handle_input(&mut self, input: Input) -> Option<Command> {
        let mode = self.view.as_ref().map(|v| v.mode).unwrap_or_default();
        match input {
            Input::Cursor(position) => {
                self.cursor = position;
                None
            }
            Input::PlayCursor => Some(self.play(self.cursor)),
            Input::Play(position) => {
                self.cursor = position;
                Some(self.play(position))
            }
            Input::Undo => Some(Command::Undo),
            Input::Restart => Some(self.reset(mode)),
            Input::NewGame(mode) => Some(self.reset(mode)),
            Input::Quit => {
                self.should_quit = true;
                None
            }
        }
    }

    /// Text for the status bar.
    pub fn status_line(&self) -> String {
        let Some(view) = &self.view else {
            return "Starting...".to_string();
        };
        if let Some(notice) = &self.notice {
            if view.status.is_finished() || !notice.is_terminal() {
                return notice.to_string();
            }
        }
        match view.status {
            GameStatus::InProgress if view.mode.is_ai_seat(view.active) => {
                "AI is thinking...".to_string()
            }
            GameStatus::InProgress => format!("{}'s turn", view.active),
            finished => format!("{}. Press 'r' to play again.", finished),
        }
    }

    fn play(&mut self, position: Position) -> Command {
        self.notice = None;
        Command::Submit {
            row: position.row(),
            col: position.col(),
        }
    }

    fn reset(&mut self, mode: Mode) -> Command {
        self.notice = None;
        self.cursor = Position::Center;
        Command::Reset(mode)
    }
}
