//! Ports (trait boundaries) for external collaborators.
//!
//! Games, players, storage and session observers are all reached through
//! these traits. Concrete implementations live in `tictactoe`, `players`,
//! `adapters` and `pipeline`.

pub mod game_state;
pub mod observer;
pub mod player;
pub mod repository;

pub use game_state::{GameState, Outcome};
pub use observer::Observer;
pub use player::Player;
pub use repository::BrainRepository;
