//! Strictly Tic-Tac-Toe - game rules and a minimax opponent
//!
//! This crate has no I/O. It holds the 3x3 game state, the placement
//! rules, and a depth-limited minimax search with alpha-beta pruning
//! that scores leaves with a line-counting heuristic.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] owns the grid and derives the winner
//! - **Rules**: win and draw detection over the 8 lines
//! - **Search**: [`Minimax`] picks a move for a given mark
//! - **Session**: [`Session`] pairs a game with an optional computer side
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, Mark, Position, best_move};
//!
//! let mut state = GameState::new();
//! state.place(Position::TopLeft, Mark::X).unwrap();
//! let reply = best_move(&mut state, Mark::O, 9);
//! assert_eq!(reply, Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
pub mod search;
mod session;
mod state;
mod types;

// Crate-level exports - Domain types
pub use types::{Board, BoardError, GameStatus, Mark, Square};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Game state
pub use state::GameState;

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Search engine
pub use search::{
    DEFAULT_DEPTH, Evaluator, LineEvaluator, Minimax, MoveScore, SearchConfig, best_move, best_of,
    static_eval,
};

// Crate-level exports - Sessions
pub use session::{Session, SessionConfig};
