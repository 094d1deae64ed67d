//! Command-line interface for the game server.

use clap::Parser;

/// Tic-tac-toe game server.
#[derive(Parser, Debug)]
#[command(name = "noughts_server")]
#[command(about = "Serves a tic-tac-toe game over a JSON REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Port to bind to
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}
