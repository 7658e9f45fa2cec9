//! Snapshot history of the game, one record per accepted move.

use super::types::Board;
use serde::{Deserialize, Serialize};

/// One history entry: the board after a move, plus the cell just filled.
///
/// The initial record holds the all-empty board with cell 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    cell: usize,
}

impl MoveRecord {
    /// Creates the initial record: empty board, cell 0.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            cell: 0,
        }
    }

    /// Creates a record for a move that filled `cell`.
    pub fn new(board: Board, cell: usize) -> Self {
        Self { board, cell }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The index of the cell this move filled.
    pub fn cell(&self) -> usize {
        self.cell
    }

    /// Row of the filled cell.
    pub fn row(&self) -> usize {
        self.cell / 3
    }

    /// Column of the filled cell.
    pub fn col(&self) -> usize {
        self.cell % 3
    }
}

/// Ordered move records, append-only until a branch truncates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    /// Creates a history holding only the initial empty-board record.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
        }
    }

    /// Number of records. At least 1: the initial record is never removed.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history holds no records. Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&MoveRecord> {
        self.records.get(step)
    }

    /// Drops every record after `step`.
    pub fn truncate_after(&mut self, step: usize) {
        self.records.truncate(step + 1);
    }

    /// Appends a record and returns its step index.
    pub fn push(&mut self, record: MoveRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Iterates records in order.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_initial_record() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        let record = history.get(0).expect("initial record");
        assert_eq!(record.board(), &Board::new());
        assert_eq!(record.cell(), 0);
    }

    #[test]
    fn test_truncate_after_discards_later_records() {
        let mut history = History::new();
        history.push(MoveRecord::new(Board::new(), 4));
        history.push(MoveRecord::new(Board::new(), 8));
        assert_eq!(history.len(), 3);

        history.truncate_after(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1).map(MoveRecord::cell), Some(4));
    }

    #[test]
    fn test_row_col_of_record() {
        let record = MoveRecord::new(Board::new(), 5);
        assert_eq!(record.row(), 1);
        assert_eq!(record.col(), 2);
    }
}
