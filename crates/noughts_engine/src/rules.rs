//! Game rules: win/tie evaluation and the move state machine.

use crate::position::Position;
use crate::types::{Board, GameStatus, Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples as flat board indices, in check order.
///
/// The order is fixed so the reported winning line is deterministic. At most
/// one player can complete a line on any given move, so the order never
/// changes who wins, only which of a double-threat's lines gets reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Top row
    [3, 4, 5], // Middle row
    [6, 7, 8], // Bottom row
    [0, 3, 6], // Left column
    [1, 4, 7], // Middle column
    [2, 5, 8], // Right column
    [0, 4, 8], // Main diagonal
    [2, 4, 6], // Anti-diagonal
];

/// Evaluates a board into exactly one status.
///
/// Returns `Won` for the first matched triple, `Tied` for a full board with
/// no winner, and `InProgress` otherwise.
pub fn evaluate(board: &Board) -> GameStatus {
    let squares = board.squares();

    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Square::Occupied(winner) = squares[a] {
            if squares[a] == squares[b] && squares[b] == squares[c] {
                return GameStatus::Won { winner, line };
            }
        }
    }

    if board.is_full() {
        GameStatus::Tied
    } else {
        GameStatus::InProgress
    }
}

/// Reasons a move is rejected. Rejected moves change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square is already occupied.
    #[display("square is already occupied")]
    Occupied,
    /// The game has already ended.
    #[display("game is already over")]
    Finished,
}

/// A single round of tic-tac-toe.
///
/// Owns the board, the player to move, and the status derived from the
/// board after every accepted move. `Won` and `Tied` are terminal: the only
/// way forward is a fresh `Game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Once the game is terminal this stops advancing; after a winning move
    /// it still names the winner.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Places the current player's mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Finished`] when the game is already over and
    /// [`MoveError::Occupied`] when the square is taken. Either way the
    /// board, the player to move, and the status are untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::Finished);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied);
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.to_move = self.to_move.opponent();
        }

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
