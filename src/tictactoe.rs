//! Tic-Tac-Toe game implementation

pub mod board;
pub mod lines;

pub use board::{Cell, Mark, TicTacToe};
pub use lines::{LineAnalyzer, WINNING_LINES};
