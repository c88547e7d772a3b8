//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's mark.
///
/// Marks are signed unit values: `X` is `+1` and always moves first,
/// `O` is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Tri-state encoding of the mark (`+1` or `-1`).
    pub fn sign(self) -> i8 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Mark),
}

impl Square {
    /// Decodes the tri-state value (0 / +1 / -1).
    pub fn from_sign(value: i8) -> Result<Self, BoardError> {
        match value {
            0 => Ok(Square::Empty),
            1 => Ok(Square::Occupied(Mark::X)),
            -1 => Ok(Square::Occupied(Mark::O)),
            other => Err(BoardError::InvalidCell(other)),
        }
    }

    /// Encodes the square as 0 / +1 / -1.
    pub fn sign(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(mark) => mark.sign(),
        }
    }

    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Errors building a board from raw input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A tri-state cell value other than -1, 0 or 1.
    #[display("Invalid cell value {} (expected -1, 0 or 1)", _0)]
    InvalidCell(i8),

    /// Text that does not describe nine cells.
    #[display("Cannot parse board: {}", _0)]
    Parse(String),
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe grid, indexed by (row, col).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    grid: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from tri-state rows (0 / +1 / -1).
    pub fn from_rows(rows: [[i8; 3]; 3]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                board.grid[r][c] = Square::from_sign(*value)?;
            }
        }
        Ok(board)
    }

    /// Returns the board as tri-state rows.
    pub fn to_rows(&self) -> [[i8; 3]; 3] {
        self.grid.map(|row| row.map(Square::sign))
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.grid[pos.row()][pos.col()]
    }

    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.grid[pos.row()][pos.col()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.grid
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|square| **square == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-9 key.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Square::Empty => (pos.to_index() + 1).to_string(),
                Square::Occupied(mark) => mark.to_string(),
            };
            result.push_str(&symbol);
            match (pos.row(), pos.col()) {
                (2, 2) => {}
                (_, 2) => result.push_str("\n-+-+-\n"),
                _ => result.push('|'),
            }
        }
        result
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cells of `X`, `O` and `.`/`-`/`_`.
    ///
    /// Whitespace, `|` and `/` are separators and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for ch in s.chars() {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(BoardError::Parse(format!("unexpected character {:?}", other)));
                }
            };
            squares.push(square);
        }

        if squares.len() != 9 {
            return Err(BoardError::Parse(format!(
                "expected 9 cells, found {}",
                squares.len()
            )));
        }

        let mut board = Self::new();
        for (pos, square) in Position::ALL.into_iter().zip(squares) {
            board.set(pos, square);
        }
        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "{} wins!", mark),
            GameStatus::Draw => write!(f, "Draw!"),
        }
    }
}
