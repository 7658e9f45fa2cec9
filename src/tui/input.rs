//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the board cursor (0-8, row-major) one cell, staying on the board.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let row = cursor / 3;
    let col = cursor % 3;

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        // No change for other keys
        _ => (row, col),
    };

    row * 3 + col
}
