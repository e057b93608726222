//! Board state and win/draw queries.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// One of the nine positions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Occupied by a player's mark.
    Occupied(Mark),
}

/// The 8 winning triples: rows, columns, diagonals.
///
/// Constant for the lifetime of the program; every index is in `[0, 9)`.
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

/// 3x3 tic-tac-toe board, cells addressed 0-8 in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Clears all nine cells. Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places a mark at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range or the cell is occupied.
    /// Callers validate first; violating the precondition is a programming
    /// error, not a recoverable condition.
    pub fn set(&mut self, index: usize, mark: Mark) {
        assert!(index < 9, "cell index {index} out of range");
        assert!(
            self.cells[index] == Cell::Empty,
            "cell {index} already occupied"
        );
        self.cells[index] = Cell::Occupied(mark);
    }

    /// Checks if the cell at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if the board has no empty cells left.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Checks whether the given mark holds a complete winning triple.
    ///
    /// Callers check only the mark that just moved, so a single move can
    /// never produce an ambiguous double win.
    #[instrument(skip(self))]
    pub fn has_winner(&self, mark: Mark) -> bool {
        WIN_LINES.iter().any(|&[a, b, c]| {
            self.cells[a] == Cell::Occupied(mark)
                && self.cells[b] == Cell::Occupied(mark)
                && self.cells[c] == Cell::Occupied(mark)
        })
    }

    /// Returns the indices of all empty cells.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based key binding.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => result.push_str(&(index + 1).to_string()),
                    Cell::Occupied(mark) => result.push_str(&mark.to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!board.has_winner(Mark::X));
        assert!(!board.has_winner(Mark::O));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(1, Mark::X);
        board.set(2, Mark::X);
        assert!(board.has_winner(Mark::X));
        assert!(!board.has_winner(Mark::O));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.set(1, Mark::O);
        board.set(4, Mark::O);
        board.set(7, Mark::O);
        assert!(board.has_winner(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(2, Mark::O);
        board.set(4, Mark::O);
        board.set(6, Mark::O);
        assert!(board.has_winner(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(1, Mark::X);
        assert!(!board.has_winner(Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(1, Mark::O);
        board.set(2, Mark::X);
        assert!(!board.has_winner(Mark::X));
        assert!(!board.has_winner(Mark::O));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for index in 0..9 {
            let mark = if index % 2 == 0 { Mark::X } else { Mark::O };
            board.set(index, mark);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::new();
        board.set(4, Mark::X);
        board.set(0, Mark::O);
        board.reset();
        assert_eq!(board, Board::new());
        // Idempotent
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_tracks_occupancy() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
        board.set(4, Mark::X);
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&4));
    }

    #[test]
    fn test_display_shows_marks_and_key_labels() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(4, Mark::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_set_occupied_cell_panics() {
        let mut board = Board::new();
        board.set(4, Mark::X);
        board.set(4, Mark::O);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range_panics() {
        let mut board = Board::new();
        board.set(9, Mark::X);
    }
}
