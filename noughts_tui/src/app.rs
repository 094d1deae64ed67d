//! Application state and command handling.

use crate::input;
use crate::source::Source;
use anyhow::Result;
use crossterm::event::KeyCode;
use noughts_engine::{GameSnapshot, Position};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long the win celebration flashes before stopping on its own.
const CELEBRATION: Duration = Duration::from_secs(5);

/// Main application state.
///
/// Holds a single snapshot as the only game truth and replaces it wholesale
/// with whatever the source returns. Each command runs to completion before
/// the next key is read, so at most one request is ever in flight.
pub struct App {
    source: Source,
    snapshot: GameSnapshot,
    cursor: Position,
    last_move: Option<usize>,
    celebration_started: Option<Instant>,
}

impl App {
    /// Creates the application, fetching the initial state from the source.
    pub async fn new(source: Source) -> Result<Self> {
        let snapshot = source.fetch().await?;
        Ok(Self {
            source,
            snapshot,
            cursor: Position::ALL[4],
            last_move: None,
            celebration_started: None,
        })
    }

    /// The snapshot being rendered.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// The cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Flat index of the most recently accepted move, if any.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Animation frame of the win celebration, while it is flashing.
    ///
    /// `None` once the fixed duration has run out; the effect stops on its
    /// own without touching game state.
    pub fn celebration_frame(&self) -> Option<u64> {
        self.celebration_started
            .filter(|started| started.elapsed() < CELEBRATION)
            .map(|started| started.elapsed().as_millis() as u64 / 250)
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Plays at the cursor.
    pub async fn play_at_cursor(&mut self) {
        self.play(self.cursor).await;
    }

    /// Plays at a flat board index (digit-key input).
    pub async fn play_index(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.play(pos).await;
        }
    }

    /// Plays at the given position and re-renders from the returned state.
    ///
    /// Clicks on occupied cells or a finished game never leave the client;
    /// the source would reject them anyway.
    pub async fn play(&mut self, pos: Position) {
        if self.snapshot.game_over || self.snapshot.cell(pos.index()) != ' ' {
            debug!(row = pos.row(), col = pos.col(), "Ignoring illegal click");
            return;
        }

        debug!(row = pos.row(), col = pos.col(), "Playing");
        let result = self.source.play(pos).await;

        if self.apply(result) && self.snapshot.cell(pos.index()) != ' ' {
            self.last_move = Some(pos.index());
        }
    }

    /// Starts a new round; scores persist.
    pub async fn reset_board(&mut self) {
        debug!("Resetting board");
        let result = self.source.reset_board().await;
        if self.apply(result) {
            self.last_move = None;
        }
    }

    /// Clears the scoreboard; the board is untouched.
    pub async fn reset_scores(&mut self) {
        debug!("Resetting scores");
        let result = self.source.reset_scores().await;
        self.apply(result);
    }

    /// Replaces the snapshot wholesale, or keeps the last-known-good state
    /// when the request failed. Returns whether new state landed.
    fn apply(&mut self, result: Result<GameSnapshot>) -> bool {
        match result {
            Ok(snapshot) => {
                let newly_won = snapshot.winner != ' ' && self.snapshot.winner == ' ';
                if newly_won {
                    self.celebration_started = Some(Instant::now());
                } else if snapshot.winner == ' ' {
                    self.celebration_started = None;
                }
                self.snapshot = snapshot;
                true
            }
            Err(error) => {
                warn!(error = %error, "Request failed, keeping last known state");
                false
            }
        }
    }
}
