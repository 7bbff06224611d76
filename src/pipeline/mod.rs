//! Multi-game session pipeline
//!
//! Games run strictly one after another; the only state carried between
//! them is whatever brain the players share.

pub mod observers;
pub mod training;

pub use observers::{LogObserver, ProgressObserver};
pub use training::{Checkpoint, TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::Observer;
