//! Player port - anything that can choose moves and hear how a game ended

use super::game_state::{GameState, Outcome};
use crate::Result;

/// A participant in a game driven by [`crate::driver::run`].
///
/// Implementations range from interactive humans to brain-backed learners
/// and random baselines. The driver asks the seated player for a move each
/// turn and calls [`finish`](Player::finish) on every player once the game
/// resolves.
///
/// # Examples
///
/// ```
/// use menace_brain::{GameState, Player, Result};
///
/// struct FirstOption;
///
/// impl<G: GameState> Player<G> for FirstOption {
///     fn get_move(&mut self, state: &G) -> Result<G::Move> {
///         state
///             .options()
///             .into_iter()
///             .next()
///             .ok_or_else(|| menace_brain::Error::NoOptions { key: state.to_key() })
///     }
///
///     fn name(&self) -> &str {
///         "first-option"
///     }
/// }
/// ```
pub trait Player<G: GameState> {
    /// Choose one of `state.options()`.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced (e.g. the human input
    /// stream closed or the brain could not be locked).
    fn get_move(&mut self, state: &G) -> Result<G::Move>;

    /// Called on every player once the game has a result.
    ///
    /// `me` is the seat this player occupied. The default does nothing,
    /// which suits players that do not learn.
    fn finish(&mut self, _state: &G, _outcome: Outcome, _me: usize) -> Result<()> {
        Ok(())
    }

    /// Name used in logs and summaries.
    fn name(&self) -> &str;
}
