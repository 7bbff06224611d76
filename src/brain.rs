//! Matchbox brain
//!
//! This module provides the bead memory, its configuration, and the reward
//! table applied at the end of each game.

pub mod config;
pub mod memory;
pub mod reinforcement;
pub mod sampling;

// Re-export main types
pub use config::BrainConfig;
pub use memory::{Brain, BrainStats};
pub use reinforcement::ReinforcementValues;
