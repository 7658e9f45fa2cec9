//! Tic-tac-toe with a navigable move history.
//!
//! The game core lives in [`game`]: board types, a pure win calculator over
//! the 8 fixed lines, a snapshot history, and a controller owning the step
//! pointer. The [`tui`] module renders the current position with ratatui and
//! forwards clicks and jumps back to the controller.
//!
//! # Example
//!
//! ```
//! use tictactrail::Game;
//!
//! let mut game = Game::new();
//! game.click(4)?; // X takes the center
//! game.jump_to(0)?; // back to the start
//! assert!(game.x_is_next());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod tui;

pub use game::{
    Board, Cell, Game, GameView, History, JumpError, MoveEntry, MoveError, MoveRecord, Player,
    Winner,
};
