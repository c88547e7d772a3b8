//! Depth-limited minimax search with alpha-beta pruning.
//!
//! The search explores hypothetical placements on the caller's own
//! [`GameState`], reverting each one before moving on, so the state
//! handed in is left exactly as it was found.

mod eval;

pub use eval::{Evaluator, LineEvaluator, static_eval};

use crate::{GameState, GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ply limit that covers the whole 3x3 game tree.
pub const DEFAULT_DEPTH: u32 = 9;

/// Which side the engine plays and how deep it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below each root move. At 0 the root moves are
    /// scored directly.
    pub depth: u32,
    /// Mark the engine maximizes for.
    pub searching_mark: Mark,
}

impl SearchConfig {
    /// Full-depth search for `searching_mark`.
    pub fn new(searching_mark: Mark) -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            searching_mark,
        }
    }

    /// Sets the ply limit.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

/// Root value of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// The candidate.
    pub position: Position,
    /// Minimax value after playing it.
    pub score: i32,
}

/// Minimax searcher.
///
/// Candidates are tried in row-major order and the first one with the
/// highest value is chosen, so equal-valued moves resolve to the one
/// nearest the top-left.
#[derive(Debug, Clone)]
pub struct Minimax<E = LineEvaluator> {
    config: SearchConfig,
    evaluator: E,
    nodes: u64,
}

impl Minimax<LineEvaluator> {
    /// Creates a searcher using the line heuristic.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, LineEvaluator)
    }
}

impl<E: Evaluator> Minimax<E> {
    /// Creates a searcher with a custom leaf evaluator.
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            nodes: 0,
        }
    }

    /// Returns the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of positions visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores every legal move at the root, in iteration order.
    ///
    /// Returns an empty list when the game is already decided.
    #[instrument(skip(self, state), fields(mark = %self.config.searching_mark, depth = self.config.depth))]
    pub fn analyze(&mut self, state: &mut GameState) -> Vec<MoveScore> {
        self.nodes = 0;
        if state.status() != GameStatus::InProgress {
            return Vec::new();
        }

        let mark = self.config.searching_mark;
        let depth = self.config.depth;
        let scores: Vec<MoveScore> = state
            .available_moves()
            .into_iter()
            .map(|position| {
                let mut trial = state.explore(position, mark);
                let score = self.minimax(&mut trial, depth, i32::MIN, i32::MAX, false);
                MoveScore { position, score }
            })
            .collect();

        debug!(candidates = scores.len(), nodes = self.nodes, "Root analysis complete");
        scores
    }

    /// Returns the highest-valued move, or `None` if there is no legal move.
    pub fn best_move(&mut self, state: &mut GameState) -> Option<Position> {
        best_of(&self.analyze(state)).map(|best| best.position)
    }

    fn minimax(
        &mut self,
        state: &mut GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        let searching = self.config.searching_mark;
        if depth == 0 || state.is_full() || state.check_win() {
            return self.evaluator.evaluate(state, searching);
        }

        if maximizing {
            let mut best = i32::MIN;
            for pos in state.available_moves() {
                let value = {
                    let mut trial = state.explore(pos, searching);
                    self.minimax(&mut trial, depth - 1, alpha, beta, false)
                };
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for pos in state.available_moves() {
                let value = {
                    let mut trial = state.explore(pos, searching.opponent());
                    self.minimax(&mut trial, depth - 1, alpha, beta, true)
                };
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// First entry holding the maximum score.
pub fn best_of(scores: &[MoveScore]) -> Option<MoveScore> {
    scores.iter().copied().fold(None, |best, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })
}

/// Finds the best move for `searching_mark`, searching `depth` plies past
/// each candidate.
///
/// `state` is explored in place and restored before returning.
pub fn best_move(state: &mut GameState, searching_mark: Mark, depth: u32) -> Option<Position> {
    Minimax::new(SearchConfig::new(searching_mark).with_depth(depth)).best_move(state)
}
