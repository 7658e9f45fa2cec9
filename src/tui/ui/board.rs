//! Board grid rendering.

use crate::game::{Cell, GameView, Player};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

/// Renders the 3x3 grid and returns the screen rect of each cell.
pub fn render_board(f: &mut Frame, area: Rect, view: &GameView, cursor: usize) -> [Rect; 9] {
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

    let mut cells = [Rect::default(); 9];
    render_row(f, rows[0], view, cursor, 0, &mut cells);
    render_separator(f, rows[1]);
    render_row(f, rows[2], view, cursor, 3, &mut cells);
    render_separator(f, rows[3]);
    render_row(f, rows[4], view, cursor, 6, &mut cells);
    cells
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: usize,
    start: usize,
    cells: &mut [Rect; 9],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (offset, col) in [(0, cols[0]), (1, cols[2]), (2, cols[4])] {
        let index = start + offset;
        cells[index] = col;
        render_cell(f, col, view, cursor, index);
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_cell(f: &mut Frame, area: Rect, view: &GameView, cursor: usize, index: usize) {
    let cell = view.board.get(index).unwrap_or(Cell::Empty);
    let (text, mut style) = match cell {
        Cell::Empty => (" ", Style::default()),
        Cell::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.winner.as_ref().is_some_and(|w| w.on_line(index)) {
        style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
    }
    if index == cursor {
        style = style.bg(Color::DarkGray);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
