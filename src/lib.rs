//! MENACE (Matchbox Educable Noughts And Crosses Engine)
//!
//! A game-agnostic reinforcement learner: for every position it has seen,
//! a [`Brain`] keeps one weight ("beads") per legal option and picks moves
//! with probability proportional to those weights. After each game the
//! moves it made are rewarded or punished according to the outcome.
//!
//! This crate provides:
//! - The [`GameState`] and [`Player`] protocols and the [`run`] driver
//! - The [`Brain`] and its persistence (MessagePack or JSON)
//! - Brain-backed, human and random players
//! - Tic-Tac-Toe as the reference game
//! - Multi-game sessions with observers and per-game checkpoints
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use menace_brain::{Brain, BrainConfig, Player, run};
//! use menace_brain::players::{BrainPlayer, RandomPlayer};
//! use menace_brain::tictactoe::TicTacToe;
//!
//! let mut brain = Brain::new(BrainConfig::default())?;
//! brain.reseed(Some(42));
//! let brain = Arc::new(Mutex::new(brain));
//!
//! let mut players: Vec<Box<dyn Player<TicTacToe>>> = vec![
//!     Box::new(BrainPlayer::new(Arc::clone(&brain), "MENACE")),
//!     Box::new(RandomPlayer::with_seed("random", 7)),
//! ];
//! run(&mut TicTacToe::new(), &mut players)?;
//! assert!(!brain.lock().unwrap().is_empty());
//! # Ok::<(), menace_brain::Error>(())
//! ```

pub mod adapters;
pub mod app;
pub mod brain;
pub mod cli;
pub mod driver;
pub mod error;
pub mod pipeline;
pub mod players;
pub mod ports;
pub mod tictactoe;

pub use brain::{Brain, BrainConfig, BrainStats, ReinforcementValues};
pub use driver::run;
pub use error::{Error, Result};
pub use ports::{GameState, Outcome, Player};
