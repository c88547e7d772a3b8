//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::config::GameConfig;
use strictly_tictactoe::{GameStatus, Mark, Position, Session};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    hover: Option<Position>,
    message: Option<String>,
    cell_width: u16,
    cell_height: u16,
    running: bool,
}

impl App {
    /// Creates a new application and starts the first game.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: Session::new(config.session_config()),
            cursor: Position::Center,
            hover: None,
            message: None,
            cell_width: *config.cell_width(),
            cell_height: *config.cell_height(),
            running: true,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Cell under the pointer, if any.
    pub fn hover(&self) -> Option<Position> {
        self.hover
    }

    /// Terminal size of one board cell.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_width, self.cell_height)
    }

    /// False once the player has asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Mark to preview under the pointer.
    ///
    /// Only shown on an empty cell while a human is to move.
    pub fn ghost(&self) -> Option<(Position, Mark)> {
        let pos = self.hover?;
        let state = self.session.state();
        (self.session.is_human_turn() && state.board().is_empty(pos))
            .then(|| (pos, state.next_mark()))
    }

    /// Text for the status line.
    pub fn status_line(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match self.session.status() {
            GameStatus::InProgress => {
                let mark = self.session.state().next_mark();
                if self.session.computer_mark().is_some() {
                    format!("Your move ({})", mark)
                } else {
                    format!("{} to move", mark)
                }
            }
            over => format!("{} Press 'r' to play again.", over),
        }
    }

    /// Applies one player action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Place(pos) => self.place(pos),
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
            }
            Action::Hover(cell) => self.hover = cell,
            Action::Restart => self.restart(),
            Action::Quit => self.running = false,
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.message = None;
    }

    fn place(&mut self, pos: Position) {
        self.cursor = pos;
        match self.session.play(pos) {
            Ok(status) => {
                debug!(%pos, %status, "Move accepted");
                self.message = None;
            }
            Err(e) => {
                debug!(%pos, error = %e, "Move ignored");
                self.message = Some(e.to_string());
            }
        }
    }
}
