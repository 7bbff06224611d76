//! Brain-backed player: picks moves from a shared brain and feeds results back

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error, Result,
    brain::{Brain, ReinforcementValues},
    ports::{GameState, Outcome, Player},
};

/// Player that draws moves from a [`Brain`] and reinforces them afterwards.
///
/// Every move is logged as `(state key, option index)`. When the game ends
/// each logged move receives the same bead delta: win, draw or loss per the
/// configured [`ReinforcementValues`]. The log is cleared after `finish`.
///
/// Several players may share one brain, which is how self-play works: both
/// seats hold clones of the same `Arc<Mutex<Brain>>`.
pub struct BrainPlayer {
    brain: Arc<Mutex<Brain>>,
    name: String,
    reinforcement: ReinforcementValues,
    log: Vec<(String, usize)>,
}

impl BrainPlayer {
    /// Create a player over a shared brain with MENACE's default rewards.
    pub fn new(brain: Arc<Mutex<Brain>>, name: impl Into<String>) -> Self {
        Self {
            brain,
            name: name.into(),
            reinforcement: ReinforcementValues::default(),
            log: Vec::new(),
        }
    }

    /// Replace the reward table.
    pub fn with_reinforcement(mut self, reinforcement: ReinforcementValues) -> Self {
        self.reinforcement = reinforcement;
        self
    }

    /// Moves made so far in the current game.
    pub fn log(&self) -> &[(String, usize)] {
        &self.log
    }

    /// Get a clone of the shared brain reference
    pub fn clone_ref(&self) -> Arc<Mutex<Brain>> {
        Arc::clone(&self.brain)
    }

    fn lock(&self, operation: &str) -> Result<MutexGuard<'_, Brain>> {
        self.brain.lock().map_err(|_| Error::BrainLockPoisoned {
            operation: format!("{operation} for '{}'", self.name),
        })
    }
}

impl<G: GameState> Player<G> for BrainPlayer {
    fn get_move(&mut self, state: &G) -> Result<G::Move> {
        let index = self.lock("selecting a move")?.get_move_index(state)?;
        let key = state.to_key();
        let mv = state
            .options()
            .get(index)
            .cloned()
            .ok_or_else(|| Error::NoOptions { key: key.clone() })?;
        self.log.push((key, index));
        Ok(mv)
    }

    fn finish(&mut self, _state: &G, outcome: Outcome, me: usize) -> Result<()> {
        let delta = self.reinforcement.delta(outcome, me);
        let mut brain = self.lock("applying reinforcement")?;
        for (key, index) in &self.log {
            brain.update(key, *index, delta);
        }
        drop(brain);
        log::debug!(
            "{} reinforced {} moves by {delta} after {outcome:?}",
            self.name,
            self.log.len()
        );
        self.log.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BrainConfig, tictactoe::TicTacToe};

    fn shared_brain(seed: u64) -> Arc<Mutex<Brain>> {
        let mut brain = Brain::new(BrainConfig::default()).unwrap();
        brain.reseed(Some(seed));
        Arc::new(Mutex::new(brain))
    }

    #[test]
    fn get_move_returns_logged_option() {
        let brain = shared_brain(1);
        let mut player = BrainPlayer::new(Arc::clone(&brain), "menace");
        let game = TicTacToe::new();

        let mv = Player::<TicTacToe>::get_move(&mut player, &game).unwrap();

        let (key, index) = player.log()[0].clone();
        assert_eq!(key, ".........");
        assert_eq!(game.options()[index], mv);
        assert_eq!(brain.lock().unwrap().weights(".........").unwrap().len(), 9);
    }

    #[test]
    fn finish_rewards_each_logged_move_equally() {
        let brain = shared_brain(2);
        let mut player = BrainPlayer::new(Arc::clone(&brain), "menace");
        let mut game = TicTacToe::new();

        let first = Player::<TicTacToe>::get_move(&mut player, &game).unwrap();
        game.apply(&first).unwrap();
        let reply = game.options()[0];
        game.apply(&reply).unwrap();
        Player::<TicTacToe>::get_move(&mut player, &game).unwrap();

        let logged = player.log().to_vec();
        let before: Vec<i64> = {
            let guard = brain.lock().unwrap();
            logged
                .iter()
                .map(|(key, index)| guard.weights(key).unwrap()[*index])
                .collect()
        };

        Player::<TicTacToe>::finish(&mut player, &game, Outcome::Win(0), 0).unwrap();

        let guard = brain.lock().unwrap();
        for ((key, index), before) in logged.iter().zip(before) {
            assert_eq!(guard.weights(key).unwrap()[*index], before + 3);
        }
        assert!(player.log().is_empty());
    }

    #[test]
    fn custom_reinforcement_applies() {
        let brain = shared_brain(3);
        let mut player = BrainPlayer::new(Arc::clone(&brain), "menace").with_reinforcement(
            ReinforcementValues {
                win: 5,
                draw: 0,
                loss: -2,
            },
        );
        let game = TicTacToe::new();
        Player::<TicTacToe>::get_move(&mut player, &game).unwrap();
        let (key, index) = player.log()[0].clone();

        Player::<TicTacToe>::finish(&mut player, &game, Outcome::Win(1), 0).unwrap();

        assert_eq!(brain.lock().unwrap().weights(&key).unwrap()[index], 0);
    }
}
