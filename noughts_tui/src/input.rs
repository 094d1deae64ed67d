//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_engine::Position;

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Up => (row.wrapping_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.wrapping_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };

    Position::new(row, col).unwrap_or(cursor)
}
