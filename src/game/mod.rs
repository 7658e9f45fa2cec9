//! Game core: board types, win detection, history, and the controller.

mod controller;
mod history;
mod rules;
mod types;

pub use controller::{Game, GameView, JumpError, MoveEntry, MoveError};
pub use history::{History, MoveRecord};
pub use rules::{WIN_LINES, Winner, check_winner};
pub use types::{Board, Cell, Player};
