//! Full-board and draw detection.

use super::super::{Board, Square};
use super::win::check_winner;

/// True when every square holds a mark.
pub fn is_full(board: &Board) -> bool {
    !board.rows().iter().flatten().any(|square| *square == Square::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
