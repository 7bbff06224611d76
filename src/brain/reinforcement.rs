//! Reward table applied to every logged move at the end of a game

use serde::{Deserialize, Serialize};

use crate::ports::Outcome;

/// Bead deltas for each game result, from one player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReinforcementValues {
    pub win: i64,
    pub draw: i64,
    pub loss: i64,
}

impl Default for ReinforcementValues {
    fn default() -> Self {
        // MENACE's original values
        ReinforcementValues {
            win: 3,
            draw: 1,
            loss: -1,
        }
    }
}

impl ReinforcementValues {
    /// Delta for the player seated at `me`.
    pub fn delta(&self, outcome: Outcome, me: usize) -> i64 {
        match outcome {
            Outcome::Tie => self.draw,
            Outcome::Win(winner) if winner == me => self.win,
            Outcome::Win(_) => self.loss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_deltas() {
        let values = ReinforcementValues::default();
        assert_eq!(values.delta(Outcome::Tie, 0), 1);
        assert_eq!(values.delta(Outcome::Win(0), 0), 3);
        assert_eq!(values.delta(Outcome::Win(1), 0), -1);
        assert_eq!(values.delta(Outcome::Win(1), 1), 3);
    }
}
