//! Strictly Minimax - tic-tac-toe against a minimax opponent
//!
//! The game rules and search engine live in [`strictly_tictactoe`]; this
//! crate adds configuration, position analysis and a terminal front end.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Suggest**: scores every move of a given position
//! - **TUI**: ratatui board with keyboard and mouse input
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Position, suggest};
//!
//! let board = "XX. OO. ...".parse().unwrap();
//! let analysis = suggest(board, None, 9);
//! assert_eq!(analysis.best, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod suggest;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{
    ConfigError, ConfigOverrides, GameConfig, MAX_CELL_HEIGHT, MAX_CELL_WIDTH, MIN_CELL_HEIGHT,
    MIN_CELL_WIDTH,
};

// Crate-level exports - Analysis
pub use suggest::{Suggestion, suggest};

// Crate-level exports - Game types
pub use strictly_tictactoe::{
    Board, BoardError, DEFAULT_DEPTH, Evaluator, GameState, GameStatus, LineEvaluator, Mark,
    Minimax, Move, MoveError, MoveScore, Position, SearchConfig, Session, SessionConfig, Square,
    best_move, best_of, static_eval,
};
