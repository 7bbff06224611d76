//! Brain configuration

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Beads placed on each option the first time a state is seen.
pub const DEFAULT_INITIAL_BEADS: u32 = 2;

/// Configuration for a fresh [`Brain`](super::Brain).
///
/// # Examples
///
/// ```
/// use menace_brain::BrainConfig;
///
/// let config = BrainConfig::default().with_initial_beads(4).with_clamp_at_zero(true);
/// assert_eq!(config.initial_beads, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainConfig {
    /// Weight assigned to each option on first visit. Must be positive.
    pub initial_beads: u32,
    /// Floor updated weights at zero instead of letting them go negative.
    ///
    /// Off by default: classic matchbox updates are unclamped, and a weight
    /// that drifts below zero is surfaced as an error at selection time.
    pub clamp_at_zero: bool,
}

impl BrainConfig {
    /// Set the initial bead count.
    pub fn with_initial_beads(mut self, beads: u32) -> Self {
        self.initial_beads = beads;
        self
    }

    /// Enable or disable the zero floor.
    pub fn with_clamp_at_zero(mut self, clamp: bool) -> Self {
        self.clamp_at_zero = clamp;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_beads` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.initial_beads == 0 {
            return Err(Error::InvalidConfiguration {
                message: "initial_beads must be a positive integer".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            initial_beads: DEFAULT_INITIAL_BEADS,
            clamp_at_zero: false,
        }
    }
}
