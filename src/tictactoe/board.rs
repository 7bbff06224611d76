//! Board state representation and the game-state protocol for Tic-Tac-Toe

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::{
    Error, Result,
    ports::{GameState, Outcome},
};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used in state keys.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'x',
            Cell::O => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'x' | 'X' => Some(Cell::X),
            'o' | 'O' => Some(Cell::O),
            _ => None,
        }
    }
}

/// The symbol a player places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    /// X always opens, so X sits in seat 0 and O in seat 1.
    pub fn seat(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }
}

/// Tic-Tac-Toe position.
///
/// Cells are numbered 1-9 row-major, and those numbers are the move values
/// returned by [`GameState::options`].
///
/// ```text
///  1 | 2 | 3
/// ---+---+---
///  4 | 5 | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Cell; 9],
    to_move: Mark,
}

impl TicTacToe {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        TicTacToe {
            cells: [Cell::Empty; 9],
            to_move: Mark::X,
        }
    }

    /// Parse a nine-character state key such as `"x.o......"`.
    ///
    /// The side to move is inferred from the piece counts: X opens, so equal
    /// counts mean X to move and one extra X means O to move.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The key is not exactly nine characters
    /// - Any character is not `.`, `x` or `o`
    /// - The piece counts cannot arise in an X-first game
    pub fn from_key(key: &str) -> Result<Self> {
        let chars: Vec<char> = key.chars().collect();
        if chars.len() != 9 {
            return Err(Error::InvalidKey {
                key: key.to_string(),
                reason: format!("expected 9 cells, got {}", chars.len()),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidKey {
                key: key.to_string(),
                reason: format!("invalid character '{c}' at cell {}", i + 1),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        let to_move = if x_count == o_count {
            Mark::X
        } else if x_count == o_count + 1 {
            Mark::O
        } else {
            return Err(Error::InvalidKey {
                key: key.to_string(),
                reason: format!("piece counts X={x_count}, O={o_count} are impossible"),
            });
        };

        Ok(TicTacToe { cells, to_move })
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Contents of cell `position` (1-9).
    pub fn get(&self, position: usize) -> Option<Cell> {
        position
            .checked_sub(1)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Empty cell numbers in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::winner(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToe {
    type Move = usize;

    fn options(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return Vec::new();
        }
        self.empty_positions()
    }

    fn apply(&mut self, mv: &usize) -> Result<()> {
        let position = *mv;
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if !(1..=9).contains(&position) {
            return Err(Error::InvalidPosition { position });
        }
        let cell = &mut self.cells[position - 1];
        if *cell != Cell::Empty {
            return Err(Error::InvalidMove { position });
        }
        *cell = self.to_move.to_cell();
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn who(&self) -> usize {
        self.to_move.seat()
    }

    fn result(&self) -> Option<Outcome> {
        match self.winner() {
            Some(mark) => Some(Outcome::Win(mark.seat())),
            None if self.is_full() => Some(Outcome::Tie),
            None => None,
        }
    }

    fn to_key(&self) -> String {
        self.cells.iter().map(|cell| cell.to_char()).collect()
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let rendered: Vec<String> = (0..3)
                .map(|col| {
                    let idx = row * 3 + col;
                    match self.cells[idx] {
                        Cell::Empty => (idx + 1).to_string(),
                        cell => cell.to_char().to_string(),
                    }
                })
                .collect();
            writeln!(f, " {} ", rendered.join(" | "))?;
        }
        Ok(())
    }
}
