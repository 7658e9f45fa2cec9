//! Move list rendering.

use crate::game::GameView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Renders the move list and returns the rect of each visible entry.
pub fn render_moves(f: &mut Frame, area: Rect, view: &GameView) -> Vec<(usize, Rect)> {
    let block = Block::default().borders(Borders::ALL).title("Moves");
    let inner = block.inner(area);

    // Scroll just enough to keep the displayed step visible.
    let height = inner.height as usize;
    let current = view.moves.iter().position(|entry| entry.current).unwrap_or(0);
    let scroll = if height == 0 {
        0
    } else {
        current.saturating_sub(height - 1)
    };

    let lines: Vec<Line> = view
        .moves
        .iter()
        .skip(scroll)
        .take(height)
        .map(|entry| {
            let marker = if entry.current { "> " } else { "  " };
            let style = if entry.current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::styled(format!("{}{}", marker, entry.label), style)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);

    view.moves
        .iter()
        .skip(scroll)
        .take(height)
        .enumerate()
        .map(|(offset, entry)| {
            let rect = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
            (entry.step, rect)
        })
        .collect()
}
