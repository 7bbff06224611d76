//! Player implementations
//!
//! - [`BrainPlayer`]: learns through a shared [`crate::Brain`]
//! - [`HumanPlayer`]: reads moves from a line-based stream
//! - [`RandomPlayer`]: uniform baseline

pub mod brain_player;
pub mod human;
pub mod random;

pub use brain_player::BrainPlayer;
pub use human::HumanPlayer;
pub use random::RandomPlayer;
