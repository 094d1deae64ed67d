//! Tic-tac-toe game server binary.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts_engine::Series;
use noughts_server::router;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let series = Arc::new(Mutex::new(Series::new()));
    let app = router(series);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Server ready");
    info!("Endpoints: GET /api/game, POST /api/move, POST /api/reset, POST /api/reset-scores");

    axum::serve(listener, app).await?;

    Ok(())
}
