//! Thin HTTP client for the game server's REST API.

use anyhow::{Context, Result};
use noughts_engine::{GameSnapshot, Position};
use tracing::{debug, instrument};

/// HTTP game client bound to one server.
///
/// Every call returns the server's full snapshot; a transport failure or a
/// non-2xx response is an error the caller logs, leaving its own state at
/// last-known-good.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the current game state.
    #[instrument(skip(self))]
    pub async fn get_game(&self) -> Result<GameSnapshot> {
        debug!("Fetching game state");
        let url = format!("{}/api/game", self.base_url);
        let response = self.client.get(&url).send().await.context("request failed")?;
        Self::parse(response).await
    }

    /// Submits a move; the response carries the resulting state (unchanged
    /// when the server rejected the move).
    #[instrument(skip(self), fields(row = pos.row(), col = pos.col()))]
    pub async fn make_move(&self, pos: Position) -> Result<GameSnapshot> {
        debug!("Sending move");
        let url = format!("{}/api/move", self.base_url);
        let body = serde_json::json!({ "row": pos.row(), "col": pos.col() });
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("request failed")?;
        Self::parse(response).await
    }

    /// Starts a new round; scores persist.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<GameSnapshot> {
        let url = format!("{}/api/reset", self.base_url);
        let response = self.client.post(&url).send().await.context("request failed")?;
        Self::parse(response).await
    }

    /// Clears the scoreboard; the board is untouched.
    #[instrument(skip(self))]
    pub async fn reset_scores(&self) -> Result<GameSnapshot> {
        let url = format!("{}/api/reset-scores", self.base_url);
        let response = self.client.post(&url).send().await.context("request failed")?;
        Self::parse(response).await
    }

    async fn parse(response: reqwest::Response) -> Result<GameSnapshot> {
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("server returned {status}");
        }
        response.json().await.context("invalid state payload")
    }
}
