//! Game session: one game plus the optional computer opponent.

use super::action::{Move, MoveError};
use super::search::{DEFAULT_DEPTH, Minimax, MoveScore, SearchConfig, best_of};
use super::{GameState, GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// How a session is played. Fixed for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Whether one side is played by the search engine.
    pub vs_computer: bool,
    /// Whether the computer takes X and opens the game.
    pub computer_moves_first: bool,
    /// Search depth for the computer.
    pub depth: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            vs_computer: true,
            computer_moves_first: false,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SessionConfig {
    /// Mark played by the computer, if any.
    pub fn computer_mark(&self) -> Option<Mark> {
        self.vs_computer.then_some(if self.computer_moves_first {
            Mark::X
        } else {
            Mark::O
        })
    }
}

/// A running game.
///
/// Human moves go through [`Session::play`]. When the computer is due to
/// reply, it does so before `play` returns.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    state: GameState,
    history: Vec<Move>,
}

impl Session {
    /// Starts a session. A computer playing X opens immediately.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            config,
            state: GameState::new(),
            history: Vec::new(),
        };
        session.respond();
        session
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Mark played by the computer, if any.
    pub fn computer_mark(&self) -> Option<Mark> {
        self.config.computer_mark()
    }

    /// Returns true when the next mark belongs to a human.
    pub fn is_human_turn(&self) -> bool {
        !self.status().is_over() && self.computer_mark() != Some(self.state.next_mark())
    }

    /// Places the next mark at `pos`, then lets the computer reply.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from the placement; the session is
    /// unchanged in that case.
    #[instrument(skip(self), fields(next = %self.state.next_mark()))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        let mark = self.state.next_mark();
        self.state.place(pos, mark)?;
        self.history.push(Move::new(mark, pos));
        self.respond();
        Ok(self.status())
    }

    /// Discards the current game and starts over with the same configuration.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting session");
        *self = Self::new(self.config);
    }

    /// Plays the computer's move if it is due.
    fn respond(&mut self) -> Option<Move> {
        let mark = self.computer_mark()?;
        if self.status().is_over() || self.state.next_mark() != mark {
            return None;
        }

        let mut search = Minimax::new(SearchConfig::new(mark).with_depth(self.config.depth));
        let best = best_of(&search.analyze(&mut self.state))?;
        let reply = self.apply_reply(mark, best)?;
        info!(%reply, score = best.score, nodes = search.nodes(), "Computer moved");
        Some(reply)
    }

    /// Places the engine's choice, logging a rejection instead of skipping silently.
    fn apply_reply(&mut self, mark: Mark, best: MoveScore) -> Option<Move> {
        match self.state.place(best.position, mark) {
            Ok(_) => {
                let reply = Move::new(mark, best.position);
                self.history.push(reply);
                Some(reply)
            }
            Err(e) => {
                error!(position = %best.position, %mark, error = %e, "Computer move rejected");
                None
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
