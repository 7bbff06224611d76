//! Observer port - abstraction for watching multi-game sessions
//!
//! Observers let the pipeline report progress without coupling the game loop
//! to a particular output (progress bars, log lines, metrics).

use crate::{Result, ports::game_state::Outcome};

/// Observer trait for monitoring a training session
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_game_end(game_num, outcome)`
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use menace_brain::{Outcome, ports::Observer};
///
/// struct TieCounter {
///     ties: usize,
/// }
///
/// impl Observer for TieCounter {
///     fn on_game_end(&mut self, _game_num: usize, outcome: Outcome) -> menace_brain::Result<()> {
///         if outcome == Outcome::Tie {
///             self.ties += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts. `game_num` is 0-based.
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after every player has been told the outcome.
    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    /// Called when training completes, including early stops.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
