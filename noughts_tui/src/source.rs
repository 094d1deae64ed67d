//! The seam between the one presentation layer and its two state sources.

use crate::rest_client::RestClient;
use anyhow::Result;
use noughts_engine::{GameSnapshot, Position, Series};
use tracing::debug;

/// Where authoritative game state comes from.
///
/// Local mode runs the engine in-process; remote mode defers to the game
/// server. Either way every operation yields a full [`GameSnapshot`] and the
/// UI renders exactly that, so the rendering code cannot tell the modes
/// apart.
pub enum Source {
    /// Engine in-process.
    Local(Series),
    /// Engine behind the REST API.
    Remote(RestClient),
}

impl Source {
    /// Current state without acting on it.
    pub async fn fetch(&self) -> Result<GameSnapshot> {
        match self {
            Source::Local(series) => Ok(GameSnapshot::from(series)),
            Source::Remote(client) => client.get_game().await,
        }
    }

    /// Plays at the given position. Illegal moves are dropped silently in
    /// both modes; the returned snapshot is simply unchanged.
    pub async fn play(&mut self, pos: Position) -> Result<GameSnapshot> {
        match self {
            Source::Local(series) => {
                if let Err(error) = series.play(pos) {
                    debug!(%error, "Move rejected");
                }
                Ok(GameSnapshot::from(&*series))
            }
            Source::Remote(client) => client.make_move(pos).await,
        }
    }

    /// Starts a new round; scores persist.
    pub async fn reset_board(&mut self) -> Result<GameSnapshot> {
        match self {
            Source::Local(series) => {
                series.reset_board();
                Ok(GameSnapshot::from(&*series))
            }
            Source::Remote(client) => client.reset().await,
        }
    }

    /// Clears the scoreboard; the board is untouched.
    pub async fn reset_scores(&mut self) -> Result<GameSnapshot> {
        match self {
            Source::Local(series) => {
                series.reset_scores();
                Ok(GameSnapshot::from(&*series))
            }
            Source::Remote(client) => client.reset_scores().await,
        }
    }
}
