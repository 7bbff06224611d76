//! Game-state port - the contract any game exposes to the learning engine
//!
//! The brain never inspects a game directly. It only needs an ordered list of
//! legal options, a way to apply one, whose turn it is, whether the game has
//! finished, and a stable key identifying the complete position.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Terminal result of a game.
///
/// Seats are 0-based indices into the player list handed to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody won.
    Tie,
    /// The player in this seat won.
    Win(usize),
}

impl Outcome {
    /// Winning seat, if any.
    pub fn winner(self) -> Option<usize> {
        match self {
            Outcome::Win(seat) => Some(seat),
            Outcome::Tie => None,
        }
    }

    /// Whether the player in `seat` won.
    pub fn is_win_for(self, seat: usize) -> bool {
        self == Outcome::Win(seat)
    }

    /// Whether the player in `seat` lost.
    pub fn is_loss_for(self, seat: usize) -> bool {
        matches!(self, Outcome::Win(winner) if winner != seat)
    }
}

/// A turn-based, perfect-information game position.
///
/// # Contract
///
/// - [`options`](GameState::options) is deterministic: the same position
///   always yields the same moves in the same order. It is non-empty while
///   [`result`](GameState::result) is `None`.
/// - [`to_key`](GameState::to_key) is injective over reachable positions.
///   Two live positions must never share a key, since the brain indexes its
///   bead vectors by key and by option order.
///
/// # Examples
///
/// ```
/// use menace_brain::{GameState, Outcome, tictactoe::TicTacToe};
///
/// let mut game = TicTacToe::new();
/// assert_eq!(game.to_key(), ".........");
/// game.apply(&5)?;
/// assert_eq!(game.to_key(), "....x....");
/// assert_eq!(game.who(), 1);
/// assert_eq!(game.result(), None::<Outcome>);
/// # Ok::<(), menace_brain::Error>(())
/// ```
pub trait GameState {
    /// A single move as handed to [`apply`](GameState::apply).
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// Legal moves in a deterministic order.
    fn options(&self) -> Vec<Self::Move>;

    /// Apply a move previously returned by [`options`](GameState::options).
    ///
    /// # Errors
    ///
    /// Returns an error if the move is not legal in this position.
    fn apply(&mut self, mv: &Self::Move) -> Result<()>;

    /// Seat of the player to move.
    fn who(&self) -> usize;

    /// `None` while the game is in progress.
    fn result(&self) -> Option<Outcome>;

    /// Stable, collision-free serialization of the full position.
    fn to_key(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_perspectives() {
        let win = Outcome::Win(1);
        assert!(win.is_win_for(1));
        assert!(win.is_loss_for(0));
        assert!(!win.is_loss_for(1));
        assert_eq!(win.winner(), Some(1));

        assert!(!Outcome::Tie.is_win_for(0));
        assert!(!Outcome::Tie.is_loss_for(0));
        assert_eq!(Outcome::Tie.winner(), None);
    }
}
