//! Session configuration assembled once at startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::brain::BrainConfig;

/// Who the brain plays against in non-interactive sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// The brain plays both seats, sharing one memory.
    #[default]
    #[value(name = "self")]
    SelfPlay,
    /// A uniformly random player that does not learn.
    Random,
}

/// Process-wide settings for one run of the engine.
///
/// Built once from the command line and passed explicitly; nothing in the
/// library reads global state.
///
/// # Examples
///
/// ```
/// use menace_brain::app::{OpponentKind, SessionConfig};
///
/// let config = SessionConfig::new("menace.brain")
///     .with_seed(7)
///     .with_games(10)
///     .with_opponent(OpponentKind::Random);
/// assert!(config.persists());
/// assert_eq!(config.brain_config().initial_beads, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where the brain is loaded from and saved to
    pub brain_path: PathBuf,
    /// Play against a human on stdin/stdout
    pub interactive: bool,
    /// Never write the brain back
    pub read_only: bool,
    /// Seed for every RNG in the session
    pub seed: Option<u64>,
    /// Games to play in self-play mode
    pub games: usize,
    /// Bead count for newly seen states, overriding the stored value
    pub initial_beads: Option<u32>,
    /// Floor weights at zero on update
    pub clamp_at_zero: bool,
    pub opponent: OpponentKind,
    /// In interactive mode, the human takes seat 0
    pub human_first: bool,
    pub verbose: bool,
}

impl SessionConfig {
    pub fn new(brain_path: impl Into<PathBuf>) -> Self {
        Self {
            brain_path: brain_path.into(),
            interactive: false,
            read_only: false,
            seed: None,
            games: 100,
            initial_beads: None,
            clamp_at_zero: false,
            opponent: OpponentKind::default(),
            human_first: false,
            verbose: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_initial_beads(mut self, beads: u32) -> Self {
        self.initial_beads = Some(beads);
        self
    }

    /// Whether the brain should be written back after games.
    pub fn persists(&self) -> bool {
        !self.read_only
    }

    /// Configuration for a brain created from scratch.
    pub fn brain_config(&self) -> BrainConfig {
        let config = BrainConfig::default().with_clamp_at_zero(self.clamp_at_zero);
        match self.initial_beads {
            Some(beads) => config.with_initial_beads(beads),
            None => config,
        }
    }
}
