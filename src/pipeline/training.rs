//! Sequential multi-game sessions

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    brain::Brain,
    driver,
    ports::{BrainRepository, GameState, Observer, Outcome, Player},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of games to play. Interactive sessions use `usize::MAX` and
    /// stop when input closes.
    pub num_games: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { num_games: 100 }
    }
}

/// Result of a session, counted from seat 0's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    /// Number of wins
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of losses
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Persists a shared brain after every game.
pub struct Checkpoint {
    brain: Arc<Mutex<Brain>>,
    repository: Arc<dyn BrainRepository + Send + Sync>,
    path: PathBuf,
}

impl Checkpoint {
    pub fn new(
        brain: Arc<Mutex<Brain>>,
        repository: Arc<dyn BrainRepository + Send + Sync>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            brain,
            repository,
            path: path.into(),
        }
    }

    /// Write the brain's current state.
    pub fn save(&self) -> Result<()> {
        let brain = self.brain.lock().map_err(|_| Error::BrainLockPoisoned {
            operation: format!("checkpointing to {}", self.path.display()),
        })?;
        brain.persist(self.repository.as_ref(), &self.path)
    }
}

/// Runs games one after another, reporting to observers and checkpointing.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
    checkpoint: Option<Checkpoint>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
            checkpoint: None,
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Persist after every game
    pub fn with_checkpoint(mut self, checkpoint: Checkpoint) -> Self {
        self.checkpoint = Some(checkpoint);
        self
    }

    /// Play up to `num_games` games.
    ///
    /// `new_game` builds the initial state and `new_players` the seated
    /// players for each game; players are rebuilt every game so per-game
    /// state such as move logs starts empty. A player reporting
    /// [`Error::InputClosed`] ends the session early without error; the
    /// interrupted game is not counted.
    pub fn run<G, S, P>(&mut self, mut new_game: S, mut new_players: P) -> Result<TrainingResult>
    where
        G: GameState + 'static,
        S: FnMut() -> G,
        P: FnMut(usize) -> Vec<Box<dyn Player<G>>>,
    {
        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;
        let mut total_games = 0;

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_games)?;
        }

        for game_num in 0..self.config.num_games {
            for observer in &mut self.observers {
                observer.on_game_start(game_num)?;
            }

            let mut state = new_game();
            let mut players = new_players(game_num);
            let outcome = match driver::run(&mut state, &mut players) {
                Ok(outcome) => outcome,
                Err(Error::InputClosed) => {
                    log::info!("input closed after {total_games} games, ending session");
                    break;
                }
                Err(err) => return Err(err),
            };

            match outcome {
                Outcome::Win(0) => wins += 1,
                Outcome::Win(_) => losses += 1,
                Outcome::Tie => draws += 1,
            }
            total_games += 1;

            if let Some(checkpoint) = &self.checkpoint {
                checkpoint.save()?;
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(total_games, wins, draws, losses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_sum_to_one() {
        let result = TrainingResult::new(10, 5, 3, 2);
        assert!((result.win_rate + result.draw_rate + result.loss_rate - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_result_has_zero_rates() {
        let result = TrainingResult::new(0, 0, 0, 0);
        assert_eq!(result.win_rate, 0.0);
        assert_eq!(result.draw_rate, 0.0);
        assert_eq!(result.loss_rate, 0.0);
    }
}
