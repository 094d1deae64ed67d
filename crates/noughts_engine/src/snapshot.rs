//! Serializable full-state snapshot shared by server and client.

use crate::series::Series;
use crate::types::Scores;
use serde::{Deserialize, Serialize};

/// Complete game state in wire form.
///
/// Every endpoint returns this shape, and it is the only thing the
/// presentation layer renders: the client replaces its copy wholesale after
/// each operation and holds no independent game truth. The layout matches
/// the original browser protocol — a 3x3 grid of single characters, a
/// `' '` winner sentinel, and the winning triple as flat indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Board cells by row, each `' '`, `'X'`, or `'O'`.
    pub board: [[char; 3]; 3],
    /// Mark of the player to move (the winner's mark once won).
    pub current_player: char,
    /// True once no further moves are accepted.
    pub game_over: bool,
    /// Winning mark, or `' '` while in progress or tied.
    pub winner: char,
    /// Flat indices of the winning triple; empty unless won.
    pub winning_line: Vec<usize>,
    /// Cumulative scoreboard.
    pub scores: Scores,
}

impl From<&Series> for GameSnapshot {
    fn from(series: &Series) -> Self {
        let game = series.game();
        let squares = game.board().squares();
        let status = game.status();

        let mut board = [[' '; 3]; 3];
        for (index, square) in squares.iter().enumerate() {
            board[index / 3][index % 3] = square.symbol();
        }

        Self {
            board,
            current_player: game.to_move().symbol(),
            game_over: status.is_terminal(),
            winner: status.winner().map_or(' ', |p| p.symbol()),
            winning_line: status.winning_line().map_or_else(Vec::new, Vec::from),
            scores: *series.scores(),
        }
    }
}

impl GameSnapshot {
    /// Cell character at the given flat index (0-8).
    pub fn cell(&self, index: usize) -> char {
        self.board[index / 3][index % 3]
    }

    /// Whether the cell at the given flat index belongs to the winning triple.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line.contains(&index)
    }

    /// Status text for display.
    pub fn status_line(&self) -> String {
        if !self.game_over {
            format!("Player {}'s Turn", self.current_player)
        } else if self.winner != ' ' {
            format!("Player {} Wins!", self.winner)
        } else {
            "It's a Tie!".to_string()
        }
    }
}
