//! Move analysis for a single position.

use serde::{Serialize, Serializer};
use std::fmt;
use strictly_tictactoe::{
    Board, GameState, GameStatus, Mark, Minimax, MoveScore, Position, SearchConfig, best_of,
};
use tracing::{info, instrument};

/// Root analysis of a position, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Analysed grid; serialized in tri-state encoding.
    #[serde(serialize_with = "serialize_rows")]
    pub board: Board,
    /// Mark the search played for.
    pub mark: Mark,
    /// Ply limit used.
    pub depth: u32,
    /// Game status of the analysed position.
    pub status: GameStatus,
    /// Score of every legal move, row-major.
    pub scores: Vec<MoveScore>,
    /// Highest-scoring move.
    pub best: Option<Position>,
    /// Positions visited.
    pub nodes: u64,
}

fn serialize_rows<S: Serializer>(board: &Board, serializer: S) -> Result<S::Ok, S::Error> {
    board.to_rows().serialize(serializer)
}

/// Scores every legal move on `board` for `mark`.
///
/// With no mark given, the side due to move is analysed.
#[instrument(skip(board))]
pub fn suggest(board: Board, mark: Option<Mark>, depth: u32) -> Suggestion {
    let mut state = GameState::from_board(board);
    let mark = mark.unwrap_or_else(|| state.next_mark());

    let mut search = Minimax::new(SearchConfig::new(mark).with_depth(depth));
    let scores = search.analyze(&mut state);
    let best = best_of(&scores).map(|score| score.position);
    info!(?best, nodes = search.nodes(), "Analysis complete");

    Suggestion {
        board: state.board().clone(),
        mark,
        depth,
        status: state.status(),
        scores,
        best,
        nodes: search.nodes(),
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        writeln!(f)?;
        match self.best {
            Some(best) => {
                writeln!(f, "{} to play, depth {}:", self.mark, self.depth)?;
                for score in &self.scores {
                    writeln!(f, "  {:<20} {:>5}", score.position.to_string(), score.score)?;
                }
                write!(f, "Best move: {}", best)
            }
            None => write!(f, "Game over: {}", self.status),
        }
    }
}
