//! Winning line analysis for Tic-Tac-Toe

use super::board::{Cell, Mark};

/// Winning line indices on the 3x3 board (0-based cells)
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a mark has three in a row
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// The mark holding a complete line, if any
    pub fn winner(cells: &[Cell; 9]) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|&mark| Self::has_won(cells, mark))
    }
}
