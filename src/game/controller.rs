//! The game controller: owns the move history and the step pointer.
//!
//! Whether the game is "in progress" or "finished" is never stored; it is
//! recomputed from the record at the displayed step on every query. Jumping
//! to a step before a winning move therefore re-opens play from there, and
//! the next accepted move discards the later branch.

use super::history::{History, MoveRecord};
use super::rules::{Winner, check_winner};
use super::types::{Board, Cell, Player};
use tracing::{debug, instrument};

/// Reasons a click is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A winner already exists at the displayed step.
    #[display("game is over at the displayed step")]
    GameOver,
    /// The cell is already occupied.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(usize),
    /// The index does not name a board cell.
    #[display("no cell at index {}", _0)]
    NoSuchCell(usize),
}

impl std::error::Error for MoveError {}

/// Reason a jump is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The step is outside the recorded history.
    #[display("no history record at step {}", _0)]
    NoSuchStep(usize),
}

impl std::error::Error for JumpError {}

/// Owned game state: the full move history plus the displayed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: History,
    step: usize,
}

impl Game {
    /// Creates a new game showing the empty board.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// The step pointer of the displayed position.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The full move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// True when X moves next at the displayed step.
    ///
    /// Derived from step parity, never stored separately.
    pub fn x_is_next(&self) -> bool {
        self.step % 2 == 0
    }

    /// The player to move at the displayed step.
    pub fn next_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// The board at the displayed step.
    pub fn board(&self) -> &Board {
        self.history
            .get(self.step)
            .expect("step pointer stays within history")
            .board()
    }

    /// The winner at the displayed step, recomputed on every call.
    pub fn winner(&self) -> Option<Winner> {
        check_winner(self.board())
    }

    /// Handles a click on cell `index`.
    ///
    /// Places the mark of the player whose turn it is, truncating any
    /// records after the displayed step, and moves the pointer to the new
    /// latest record.
    ///
    /// # Errors
    ///
    /// Rejected when a winner exists at the displayed step, when the cell
    /// is occupied, or when `index` is not a board cell. A rejected click
    /// leaves the history and pointer untouched.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn click(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= 9 {
            return Err(MoveError::NoSuchCell(index));
        }
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }

        let mut board = *self.board();
        if !board.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }

        let mover = self.next_player();
        board.set(index, Cell::Occupied(mover));
        self.history.truncate_after(self.step);
        self.step = self.history.push(MoveRecord::new(board, index));
        debug!(player = %mover, cell = index, step = self.step, "move accepted");

        Ok(())
    }

    /// Jumps the displayed position to `step`.
    ///
    /// The turn is re-derived from step parity.
    ///
    /// # Errors
    ///
    /// Rejected when `step` is outside the recorded history; the pointer is
    /// left unchanged.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::NoSuchStep(step));
        }
        self.step = step;
        debug!(step, "jumped");
        Ok(())
    }

    /// Builds the view of the displayed step.
    ///
    /// Pure query: does not change the game.
    pub fn view(&self) -> GameView {
        let winner = self.winner();
        let status = match winner {
            Some(winner) => format!("Winner: {}", winner.player),
            None => format!("Next player: {}", self.next_player()),
        };
        let moves = self
            .history
            .iter()
            .enumerate()
            .map(|(step, record)| {
                let label = if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}({},{})", step, record.row(), record.col())
                };
                MoveEntry {
                    step,
                    label,
                    current: step == self.step,
                }
            })
            .collect();

        GameView {
            board: *self.board(),
            winner,
            status,
            moves,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// Display label, `Go to game start` or `Go to move #<n>(<row>,<col>)`.
    pub label: String,
    /// Whether this entry is the displayed step.
    pub current: bool,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// Board at the displayed step.
    pub board: Board,
    /// Winner at the displayed step, if any.
    pub winner: Option<Winner>,
    /// Status line, `Winner: <player>` or `Next player: <player>`.
    pub status: String,
    /// Move list, one entry per history record.
    pub moves: Vec<MoveEntry>,
}
