//! Observer implementations for training sessions

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::{Observer, Outcome},
};

/// Win/draw/loss counts from seat 0's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    wins: usize,
    draws: usize,
    losses: usize,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(0) => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            Outcome::Tie => self.draws += 1,
        }
    }

    fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }
}

/// Progress observer - Displays a progress bar
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: Tally,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            tally: Tally::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "{} D:{} L:{}",
            self.tally.wins, self.tally.draws, self.tally.losses
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome) -> Result<()> {
        self.tally.record(outcome);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Writes a summary line to the log every `interval` games
pub struct LogObserver {
    interval: usize,
    tally: Tally,
}

impl LogObserver {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            tally: Tally::default(),
        }
    }
}

impl Observer for LogObserver {
    fn on_game_end(&mut self, _game_num: usize, outcome: Outcome) -> Result<()> {
        self.tally.record(outcome);
        if self.tally.games().is_multiple_of(self.interval) {
            log::info!(
                "{:<16} W:{} D:{} L:{}",
                format!("{} games", self.tally.games()),
                self.tally.wins,
                self.tally.draws,
                self.tally.losses
            );
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        log::info!(
            "session finished after {} games (W:{} D:{} L:{})",
            self.tally.games(),
            self.tally.wins,
            self.tally.draws,
            self.tally.losses
        );
        Ok(())
    }
}
