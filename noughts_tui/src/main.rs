//! Terminal client for tic-tac-toe.
//!
//! Runs the engine in-process by default, or acts as a thin client against
//! a game server when `--server-url` is given. Either way the UI renders
//! exactly the state the source returns.

mod app;
mod input;
mod rest_client;
mod source;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_engine::Series;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::App;
use rest_client::RestClient;
use source::Source;

/// Terminal tic-tac-toe client.
#[derive(Parser, Debug)]
#[command(name = "noughts_tui")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Game server URL (e.g. http://localhost:8080). Omit to play locally.
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file so tracing output does not tear the alternate screen.
    let log_file = std::fs::File::create("noughts_tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let source = match cli.server_url {
        Some(url) => {
            info!(url = %url, "Starting in remote mode");
            Source::Remote(RestClient::new(&url))
        }
        None => {
            info!("Starting in local mode");
            Source::Local(Series::new())
        }
    };

    // Fetch the initial state before taking over the terminal, so a
    // connection failure prints like a normal error.
    let app = App::new(source).await?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Client error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Event loop: draw, read one key, run its command to completion.
///
/// Commands are awaited before the next key is read, so a click burst never
/// produces overlapping requests or competing authoritative states.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Short poll so the celebration keeps animating between keys.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => {
                    info!("Quitting");
                    return Ok(());
                }
                KeyCode::Char('r') => app.reset_board().await,
                KeyCode::Char('s') => app.reset_scores().await,
                KeyCode::Enter | KeyCode::Char(' ') => app.play_at_cursor().await,
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    app.move_cursor(key.code)
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(digit) = c.to_digit(10) {
                        if (1..=9).contains(&digit) {
                            app.play_index(digit as usize - 1).await;
                        }
                    }
                }
                _ => {}
            }
        }
    }
}
