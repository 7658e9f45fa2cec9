//! Application state bridging terminal input to the game controller.

use crate::game::{Game, GameView};
use crate::tui::input;
use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use tracing::debug;

/// Clickable regions recorded during the last draw, for mouse lookup.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    /// Screen rect of each board cell, indexed 0-8.
    pub cells: [Rect; 9],
    /// Visible move list entries as (step, rect of the entry's line).
    pub moves: Vec<(usize, Rect)>,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: usize,
    hits: HitMap,
}

impl App {
    /// Creates the app with a fresh game and the cursor on the center cell.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: 4,
            hits: HitMap::default(),
        }
    }

    /// The current game view for rendering.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor cell (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    if (1..=9).contains(&digit) {
                        self.click(digit as usize - 1);
                    }
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            KeyCode::Char('[') => self.step_by(-1),
            KeyCode::Char(']') => self.step_by(1),
            KeyCode::Home => self.jump(0),
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
    }

    /// Handles a left mouse click at terminal coordinates.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);

        if let Some(index) = self
            .hits
            .cells
            .iter()
            .position(|rect| rect.contains(position))
        {
            self.cursor = index;
            self.click(index);
            return;
        }

        if let Some(&(step, _)) = self
            .hits
            .moves
            .iter()
            .find(|(_, rect)| rect.contains(position))
        {
            self.jump(step);
        }
    }

    /// Records the clickable regions of the last draw.
    pub(crate) fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    // Illegal actions are ignored without user-visible feedback.

    fn click(&mut self, index: usize) {
        if let Err(err) = self.game.click(index) {
            debug!(%err, index, "click ignored");
        }
    }

    fn jump(&mut self, step: usize) {
        if let Err(err) = self.game.jump_to(step) {
            debug!(%err, step, "jump ignored");
        }
    }

    fn step_by(&mut self, delta: isize) {
        self.jump(self.game.step().saturating_add_signed(delta));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
