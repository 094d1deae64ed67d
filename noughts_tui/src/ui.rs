//! Stateless UI rendering over the current snapshot.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Renders the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Scores
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
    draw_scores(frame, chunks[3], app);

    let help = Paragraph::new("arrows move · enter places · 1-9 place · r new round · s reset scores · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, row * 3 + col);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let snapshot = app.snapshot();
    let symbol = snapshot.cell(index);

    let mut style = match symbol {
        'X' => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        'O' => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    };

    if snapshot.is_winning_cell(index) {
        style = style.fg(Color::Green);
    }
    if app.last_move() == Some(index) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if app.cursor().index() == index {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let text = format!(" {symbol} ");
    let paragraph =
        Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();

    // While the celebration runs, the status line flashes; the game state
    // underneath is untouched.
    let (text, style) = match app.celebration_frame() {
        Some(frame_no) => {
            let color = if frame_no % 2 == 0 {
                Color::Yellow
            } else {
                Color::Magenta
            };
            (
                format!("*** {} ***", snapshot.status_line()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (snapshot.status_line(), Style::default().fg(Color::Yellow)),
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let scores = &app.snapshot().scores;
    let line = format!(
        "X wins: {}   O wins: {}   Ties: {}",
        scores.wins_x(),
        scores.wins_o(),
        scores.ties()
    );
    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
