//! A run of rounds sharing one scoreboard.

use crate::position::Position;
use crate::rules::{Game, MoveError};
use crate::types::Scores;
use tracing::{info, instrument};

/// A sequence of games with cumulative scores.
///
/// This is the unit of state both the server and the local client own: the
/// round in play plus the scoreboard that outlives it. Board reset and
/// score reset are independent operations.
#[derive(Debug, Clone, Default)]
pub struct Series {
    game: Game,
    scores: Scores,
}

impl Series {
    /// Creates a fresh series: empty board, X to move, zeroed scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the round in play.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the scoreboard.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Plays at the given position, crediting the scoreboard if the move
    /// ends the round.
    ///
    /// A game only transitions into a terminal status once (terminal games
    /// reject all further moves), so each finished round is counted exactly
    /// once.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from the game; nothing changes on rejection.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        self.game.play(pos)?;

        let status = self.game.status();
        if status.is_terminal() {
            self.scores.record(status);
            info!(status = ?status, "Round finished");
        }

        Ok(())
    }

    /// Starts a new round. Scores persist.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.game = Game::new();
    }

    /// Zeroes the scoreboard. The board is untouched.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }
}
