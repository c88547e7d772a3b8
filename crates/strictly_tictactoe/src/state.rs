//! Game state: the grid, the mark to move, and the derived winner.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Mark, Square};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Complete game state.
///
/// Each instance owns its grid. Marks are only added through
/// [`GameState::place`]; the search engine's tentative placements are
/// reverted before it returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    next_mark: Mark,
    winner: Option<Mark>,
}

impl GameState {
    /// Creates a new game with an empty grid and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
            winner: None,
        }
    }

    /// Rebuilds a state from an arbitrary grid.
    ///
    /// The winner is recomputed. X is to move when it has no more marks
    /// than O, otherwise O.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Self {
        let next_mark = if board.count(Mark::X) <= board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        let winner = rules::check_winner(&board);
        Self {
            board,
            next_mark,
            winner,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark due to move next.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Returns the winner, once a line has been completed.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(mark) => GameStatus::Won(mark),
            None if rules::is_draw(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// All empty cells, in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Scans all 8 lines, records the winner and returns whether one exists.
    pub fn check_win(&mut self) -> bool {
        self.winner = rules::check_winner(&self.board);
        self.winner.is_some()
    }

    /// Places `mark` at `pos` and returns the resulting status.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has been won or drawn.
    /// - [`MoveError::Occupied`] if the square is taken.
    /// - [`MoveError::WrongTurn`] if `mark` is not the mark to move.
    ///
    /// A rejected placement leaves the state unchanged.
    #[instrument(skip(self), fields(next = ?self.next_mark))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        if mark != self.next_mark {
            return Err(MoveError::WrongTurn {
                expected: self.next_mark,
                found: mark,
            });
        }

        self.board.set(pos, Square::Occupied(mark));
        self.next_mark = mark.opponent();
        self.check_win();

        let status = self.status();
        debug!(%pos, %mark, %status, "Mark placed");
        Ok(status)
    }

    /// Places a mark for the search without validation.
    ///
    /// The returned guard derefs to the state and reverts the placement
    /// when dropped, whichever way the caller's scope is left.
    pub(crate) fn explore(&mut self, pos: Position, mark: Mark) -> Tentative<'_> {
        debug_assert!(self.board.is_empty(pos), "explored an occupied square");
        let next_mark = self.next_mark;
        self.board.set(pos, Square::Occupied(mark));
        self.next_mark = mark.opponent();
        self.check_win();
        Tentative {
            state: self,
            pos,
            next_mark,
        }
    }

    /// Empties `pos` and clears any winner it produced.
    pub(crate) fn undo(&mut self, pos: Position) {
        self.board.set(pos, Square::Empty);
        self.check_win();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A hypothetical placement held for the duration of one search frame.
pub(crate) struct Tentative<'a> {
    state: &'a mut GameState,
    pos: Position,
    next_mark: Mark,
}

impl Deref for Tentative<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        &*self.state
    }
}

impl DerefMut for Tentative<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        &mut *self.state
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.state.undo(self.pos);
        self.state.next_mark = self.next_mark;
    }
}
