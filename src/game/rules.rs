//! Win detection over the fixed set of board lines.

use super::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines (rows, columns, diagonals), in scan order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A decided game: the winning player and the line they completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// The player with three in a row.
    pub player: Player,
    /// The completed line, as board indices.
    pub line: [usize; 3],
}

impl Winner {
    /// Whether the given cell index lies on the winning line.
    pub fn on_line(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Checks if there is a winner on the board.
///
/// Scans the 8 fixed lines in order and returns the first whose three
/// cells are occupied by the same player, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Winner> {
    let cells = board.cells();

    for line in WIN_LINES {
        let [a, b, c] = line;
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            return match cell {
                Cell::Occupied(player) => Some(Winner { player, line }),
                Cell::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Player::X));
        board.set(1, Cell::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Player::X));
        board.set(1, Cell::Occupied(Player::O));
        board.set(2, Cell::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_each_line_wins() {
        for line in WIN_LINES {
            let mut board = Board::new();
            for index in line {
                board.set(index, Cell::Occupied(Player::O));
            }
            let winner = check_winner(&board).expect("filled line must win");
            assert_eq!(winner.player, Player::O);
            assert_eq!(winner.line, line);
        }
    }

    #[test]
    fn test_first_line_in_scan_order_reported() {
        // Cells 0,1,2,3,6 complete both the top row and the left column;
        // the row comes first in scan order.
        let mut board = Board::new();
        for index in [0, 1, 2, 3, 6] {
            board.set(index, Cell::Occupied(Player::X));
        }
        let winner = check_winner(&board).expect("board has a winner");
        assert_eq!(winner.line, [0, 1, 2]);
    }
}
