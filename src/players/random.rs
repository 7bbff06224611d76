//! Uniformly random baseline player

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::{GameState, Player},
};

/// Picks any legal option with equal probability. Does not learn.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a new random player
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random player with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<G: GameState> Player<G> for RandomPlayer {
    fn get_move(&mut self, state: &G) -> Result<G::Move> {
        let mut options = state.options();
        if options.is_empty() {
            return Err(Error::NoOptions {
                key: state.to_key(),
            });
        }
        let index = self.rng.random_range(0..options.len());
        Ok(options.swap_remove(index))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
