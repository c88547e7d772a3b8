//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which mark
//! went where and can be logged or replayed independently of the board.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error that can occur when placing a mark.
///
/// None of these are fatal: a rejected placement leaves the game
/// state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The mark is not the one due to move.
    #[display("It's {}'s turn, not {}'s", expected, found)]
    WrongTurn {
        /// Mark due to move.
        expected: Mark,
        /// Mark that tried to move.
        found: Mark,
    },
}

impl std::error::Error for MoveError {}
