//! Route handlers over the single shared game series.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use noughts_engine::{GameSnapshot, Position, Series};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument, warn};

/// Shared handle to the one series the server owns.
pub type SharedSeries = Arc<Mutex<Series>>;

/// Builds the application router.
pub fn router(series: SharedSeries) -> Router {
    Router::new()
        .route("/api/game", get(get_game))
        .route("/api/move", post(post_move))
        .route("/api/reset", post(post_reset))
        .route("/api/reset-scores", post(post_reset_scores))
        .route("/health", get(health))
        .with_state(series)
}

/// Move request body: board coordinates, each 0-2.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MoveRequest {
    /// Board row (0 is the top).
    pub row: usize,
    /// Board column (0 is the left).
    pub col: usize,
}

async fn health() -> &'static str {
    "ok"
}

#[instrument(skip(series))]
async fn get_game(State(series): State<SharedSeries>) -> Json<GameSnapshot> {
    let series = series.lock().unwrap();
    Json(GameSnapshot::from(&*series))
}

/// Applies a move and returns the full state.
///
/// Illegal moves are dropped, not failed: the original browser protocol
/// expects a 200 carrying the unchanged snapshot, with the board simply not
/// updating. Only malformed bodies produce a non-2xx, via the `Json`
/// extractor.
#[instrument(skip(series), fields(row = req.row, col = req.col))]
async fn post_move(
    State(series): State<SharedSeries>,
    Json(req): Json<MoveRequest>,
) -> Json<GameSnapshot> {
    let mut series = series.lock().unwrap();

    match Position::new(req.row, req.col) {
        Some(pos) => {
            if let Err(error) = series.play(pos) {
                warn!(%error, "Move rejected");
            }
        }
        None => warn!("Move coordinates out of range"),
    }

    Json(GameSnapshot::from(&*series))
}

#[instrument(skip(series))]
async fn post_reset(State(series): State<SharedSeries>) -> Json<GameSnapshot> {
    let mut series = series.lock().unwrap();
    series.reset_board();
    info!("Board reset, scores preserved");
    Json(GameSnapshot::from(&*series))
}

#[instrument(skip(series))]
async fn post_reset_scores(State(series): State<SharedSeries>) -> Json<GameSnapshot> {
    let mut series = series.lock().unwrap();
    series.reset_scores();
    info!("Scores reset, board preserved");
    Json(GameSnapshot::from(&*series))
}
