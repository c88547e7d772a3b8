//! Static evaluation of a position.

use crate::rules::LINES;
use crate::{GameState, Mark, Square};

/// Scores a position from the point of view of the searching mark.
///
/// Used at the leaves of the search: terminal positions and positions
/// where the depth budget runs out.
pub trait Evaluator {
    /// Returns a score for `state`; higher is better for `searching`.
    fn evaluate(&self, state: &GameState, searching: Mark) -> i32;
}

/// Line-counting heuristic.
///
/// Each of the 8 lines contributes according to how many of its cells
/// each side holds, but only while the line is still open for that
/// side. Lines holding both marks score nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEvaluator;

impl Evaluator for LineEvaluator {
    fn evaluate(&self, state: &GameState, searching: Mark) -> i32 {
        static_eval(state, searching)
    }
}

/// Sums the line scores for `searching` over all 8 lines.
pub fn static_eval(state: &GameState, searching: Mark) -> i32 {
    let board = state.board();
    LINES
        .iter()
        .map(|line| {
            let (own, opp) = line
                .iter()
                .fold((0, 0), |(own, opp), pos| match board.get(*pos) {
                    Square::Occupied(mark) if mark == searching => (own + 1, opp),
                    Square::Occupied(_) => (own, opp + 1),
                    Square::Empty => (own, opp),
                });
            line_score(own, opp)
        })
        .sum()
}

fn line_score(own: u8, opp: u8) -> i32 {
    match (own, opp) {
        (3, 0) => 100,
        (0, 3) => -100,
        (2, 0) => 50,
        (0, 2) => -50,
        (1, 0) => 10,
        (0, 1) => -10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &str) -> GameState {
        GameState::from_board(text.parse().unwrap())
    }

    #[test]
    fn test_empty_board_is_neutral() {
        assert_eq!(static_eval(&GameState::new(), Mark::X), 0);
        assert_eq!(static_eval(&GameState::new(), Mark::O), 0);
    }

    #[test]
    fn test_single_marks_count_open_lines() {
        // Center sits on 4 lines, a corner on 3.
        assert_eq!(static_eval(&state("... .X. ..."), Mark::X), 40);
        assert_eq!(static_eval(&state("X.. ... ..."), Mark::X), 30);
        assert_eq!(static_eval(&state("X.. ... ..."), Mark::O), -30);
    }

    #[test]
    fn test_completed_row_scores_from_both_sides() {
        let won = state("XXX OO. ...");
        // row0 +100, row1 -50, col2 +10; mixed columns and diagonals cancel
        assert_eq!(static_eval(&won, Mark::X), 60);
        assert_eq!(static_eval(&won, Mark::O), -60);
    }

    #[test]
    fn test_blocked_lines_score_zero() {
        assert_eq!(line_score(2, 1), 0);
        assert_eq!(line_score(1, 1), 0);
        assert_eq!(line_score(1, 2), 0);
        assert_eq!(line_score(0, 0), 0);
    }
}
