//! Common test utilities for the menace-brain test suite.

#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use menace_brain::{
    Brain, BrainConfig, Outcome, Player, Result, run,
    players::BrainPlayer,
    tictactoe::TicTacToe,
};

/// Fresh brain with a fixed seed, ready to share between players.
pub fn seeded_brain(seed: u64) -> Arc<Mutex<Brain>> {
    let mut brain = Brain::new(BrainConfig::default()).unwrap();
    brain.reseed(Some(seed));
    Arc::new(Mutex::new(brain))
}

/// Play one Tic-Tac-Toe game with the brain in both seats.
pub fn self_play_game(brain: &Arc<Mutex<Brain>>) -> Outcome {
    let mut players: Vec<Box<dyn Player<TicTacToe>>> = vec![
        Box::new(BrainPlayer::new(Arc::clone(brain), "X")),
        Box::new(BrainPlayer::new(Arc::clone(brain), "O")),
    ];
    run(&mut TicTacToe::new(), &mut players).unwrap()
}

/// Plays a fixed list of cells and records the outcomes it is told.
pub struct ScriptedPlayer {
    moves: VecDeque<usize>,
    pub outcomes: Arc<Mutex<Vec<(usize, Outcome)>>>,
}

impl ScriptedPlayer {
    pub fn new(moves: &[usize]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            outcomes: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Player<TicTacToe> for ScriptedPlayer {
    fn get_move(&mut self, _state: &TicTacToe) -> Result<usize> {
        Ok(self.moves.pop_front().expect("script ran out of moves"))
    }

    fn finish(&mut self, _state: &TicTacToe, outcome: Outcome, me: usize) -> Result<()> {
        self.outcomes.lock().unwrap().push((me, outcome));
        Ok(())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
