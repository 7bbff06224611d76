//! Bead memory: one weight vector per state key
//!
//! A [`Brain`] is the learned policy. For every state it has been asked
//! about it keeps one integer weight ("bead count") per option, in the
//! order the state listed its options. Selection is proportional to those
//! weights; updates add or remove beads after a game.

use std::{collections::HashMap, fmt, path::Path};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{config::BrainConfig, sampling};
use crate::{
    Error, Result,
    ports::{BrainRepository, GameState},
};

/// Learned move preferences, keyed by state.
///
/// Only `initial_beads` and `memory` are persisted. The zero floor, the RNG
/// and the recount diagnostics belong to the running process.
///
/// Share a brain between players (e.g. for self-play) through
/// `Arc<Mutex<Brain>>`; selection and update on the same key must not race.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "BrainSnapshot")]
pub struct Brain {
    initial_beads: u32,
    memory: HashMap<String, Vec<i64>>,
    #[serde(skip)]
    clamp_at_zero: bool,
    #[serde(skip)]
    rng: Option<StdRng>,
    #[serde(skip)]
    recounts: HashMap<String, u32>,
}

/// Wire form of a brain, checked before it becomes a [`Brain`].
#[derive(Deserialize)]
struct BrainSnapshot {
    initial_beads: u32,
    memory: HashMap<String, Vec<i64>>,
}

impl TryFrom<BrainSnapshot> for Brain {
    type Error = Error;

    fn try_from(snapshot: BrainSnapshot) -> Result<Self> {
        BrainConfig::default()
            .with_initial_beads(snapshot.initial_beads)
            .validate()?;
        if let Some((key, _)) = snapshot.memory.iter().find(|(_, beads)| beads.is_empty()) {
            return Err(Error::InvalidKey {
                key: key.clone(),
                reason: "stored bead vector is empty".to_string(),
            });
        }
        Ok(Brain {
            initial_beads: snapshot.initial_beads,
            memory: snapshot.memory,
            clamp_at_zero: false,
            rng: None,
            recounts: HashMap::new(),
        })
    }
}

impl fmt::Debug for Brain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Brain")
            .field("initial_beads", &self.initial_beads)
            .field("states", &self.memory.len())
            .field("clamp_at_zero", &self.clamp_at_zero)
            .field("recounts", &self.total_recounts())
            .finish()
    }
}

impl PartialEq for Brain {
    fn eq(&self, other: &Self) -> bool {
        self.initial_beads == other.initial_beads && self.memory == other.memory
    }
}

impl Brain {
    /// Create an empty brain.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    /// ```
    /// use menace_brain::{Brain, BrainConfig};
    ///
    /// let brain = Brain::new(BrainConfig::default())?;
    /// assert!(brain.is_empty());
    /// assert_eq!(brain.initial_beads(), 2);
    /// # Ok::<(), menace_brain::Error>(())
    /// ```
    pub fn new(config: BrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Brain {
            initial_beads: config.initial_beads,
            memory: HashMap::new(),
            clamp_at_zero: config.clamp_at_zero,
            rng: None,
            recounts: HashMap::new(),
        })
    }

    /// Set or reset the brain's RNG seed
    pub fn reseed(&mut self, seed: Option<u64>) {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        self.rng = Some(rng);
    }

    pub fn initial_beads(&self) -> u32 {
        self.initial_beads
    }

    /// Replace the bead count used for states seen from now on.
    ///
    /// Existing weight vectors are left untouched.
    pub fn set_initial_beads(&mut self, beads: u32) -> Result<()> {
        BrainConfig::default().with_initial_beads(beads).validate()?;
        self.initial_beads = beads;
        Ok(())
    }

    pub fn clamp_at_zero(&self) -> bool {
        self.clamp_at_zero
    }

    pub fn set_clamp_at_zero(&mut self, clamp: bool) {
        self.clamp_at_zero = clamp;
    }

    /// Pick an option for `state`, returning its 0-based index into
    /// `state.options()`.
    ///
    /// Unknown states are stocked with `initial_beads` per option. A state
    /// whose beads have all been removed is restocked (a "recount") before
    /// drawing, and the recount is logged with the state key.
    ///
    /// # Errors
    ///
    /// - [`Error::NoOptions`] if the state lists no options
    /// - [`Error::OptionCountMismatch`] if a known key now reports a
    ///   different number of options
    /// - [`Error::NegativeBeadTotal`] if unclamped updates drove the total
    ///   below zero
    pub fn get_move_index<G: GameState>(&mut self, state: &G) -> Result<usize> {
        let key = state.to_key();
        let option_count = state.options().len();
        if option_count == 0 {
            return Err(Error::NoOptions { key });
        }

        let initial = i64::from(self.initial_beads);
        let weights = self
            .memory
            .entry(key.clone())
            .or_insert_with(|| vec![initial; option_count]);

        if weights.len() != option_count {
            return Err(Error::OptionCountMismatch {
                key,
                expected: weights.len(),
                got: option_count,
            });
        }

        let mut total = sampling::total(weights);
        if total == 0 {
            weights.fill(initial);
            total = sampling::total(weights);
            *self.recounts.entry(key.clone()).or_default() += 1;
            log::warn!("bead recount for state '{key}': every option was punished to zero");
        }
        if total < 0 {
            return Err(Error::NegativeBeadTotal { key, total });
        }

        let rng = self
            .rng
            .get_or_insert_with(|| StdRng::seed_from_u64(rand::random::<u64>()));
        let index = sampling::weighted_index(rng, weights)
            .ok_or_else(|| Error::NegativeBeadTotal {
                key: key.clone(),
                total,
            })?;

        log::trace!("state '{key}' weights {weights:?} -> option {index}");
        Ok(index)
    }

    /// Add `delta` beads to option `index` of state `key`.
    ///
    /// Unless the zero floor is enabled, weights may go negative.
    ///
    /// # Panics
    ///
    /// Panics if `key` was never produced by [`get_move_index`](Self::get_move_index)
    /// or `index` is out of range for it. Both are caller contract violations.
    pub fn update(&mut self, key: &str, index: usize, delta: i64) {
        let clamp = self.clamp_at_zero;
        let weights = self
            .memory
            .get_mut(key)
            .unwrap_or_else(|| panic!("update on unknown state '{key}'"));
        let option_count = weights.len();
        let weight = weights.get_mut(index).unwrap_or_else(|| {
            panic!("option {index} out of range for state '{key}' ({option_count} options)")
        });

        *weight += delta;
        if clamp && *weight < 0 {
            *weight = 0;
        }
    }

    /// Bead vector for a state, if it has been seen.
    pub fn weights(&self, key: &str) -> Option<&[i64]> {
        self.memory.get(key).map(Vec::as_slice)
    }

    /// Iterate over every known state key.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.memory.keys()
    }

    /// Number of known states.
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// How many times `key` has been restocked this process.
    pub fn recounts(&self, key: &str) -> u32 {
        self.recounts.get(key).copied().unwrap_or_default()
    }

    pub fn total_recounts(&self) -> u32 {
        self.recounts.values().sum()
    }

    /// Summary statistics over the whole memory.
    pub fn stats(&self) -> BrainStats {
        let mut total_beads = 0;
        let mut collapsed_states = 0;
        for weights in self.memory.values() {
            let total = sampling::total(weights);
            total_beads += total;
            if total <= 0 {
                collapsed_states += 1;
            }
        }
        BrainStats {
            states: self.memory.len(),
            total_beads,
            collapsed_states,
        }
    }

    /// Serialize `{initial_beads, memory}` to JSON.
    pub fn dump(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild a brain from [`dump`](Self::dump) output.
    pub fn restore(serialized: &str) -> Result<Self> {
        Ok(serde_json::from_str(serialized)?)
    }

    /// Write this brain through a repository.
    pub fn persist(&self, repository: &dyn BrainRepository, path: &Path) -> Result<()> {
        repository.save(self, path)?;
        log::info!("saved brain with {} states to {}", self.len(), path.display());
        Ok(())
    }

    /// Read a brain through a repository.
    ///
    /// Callers that want a fresh brain on failure should fall back to
    /// [`Brain::new`]; see [`crate::app::App::load_or_create`].
    pub fn load(repository: &dyn BrainRepository, path: &Path) -> Result<Self> {
        let brain = repository.load(path)?;
        log::info!("loaded brain with {} states from {}", brain.len(), path.display());
        Ok(brain)
    }
}

/// Statistics about a brain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainStats {
    pub states: usize,
    pub total_beads: i64,
    /// States whose beads currently sum to zero or less.
    pub collapsed_states: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Outcome;

    /// A position with a fixed key and option count.
    struct Fixed {
        key: &'static str,
        options: usize,
    }

    impl GameState for Fixed {
        type Move = usize;

        fn options(&self) -> Vec<usize> {
            (0..self.options).collect()
        }

        fn apply(&mut self, _mv: &usize) -> Result<()> {
            Ok(())
        }

        fn who(&self) -> usize {
            0
        }

        fn result(&self) -> Option<Outcome> {
            None
        }

        fn to_key(&self) -> String {
            self.key.to_string()
        }
    }

    fn seeded(seed: u64) -> Brain {
        let mut brain = Brain::new(BrainConfig::default()).unwrap();
        brain.reseed(Some(seed));
        brain
    }

    #[test]
    fn first_visit_stocks_initial_beads() {
        let mut brain = seeded(1);
        let index = brain
            .get_move_index(&Fixed {
                key: "a",
                options: 4,
            })
            .unwrap();
        assert!(index < 4);
        assert_eq!(brain.weights("a"), Some(&[2, 2, 2, 2][..]));
    }

    #[test]
    fn zero_total_triggers_recount() {
        let mut brain = seeded(2);
        let state = Fixed {
            key: "a",
            options: 2,
        };
        brain.get_move_index(&state).unwrap();
        brain.update("a", 0, -2);
        brain.update("a", 1, -2);
        assert_eq!(brain.weights("a"), Some(&[0, 0][..]));

        brain.get_move_index(&state).unwrap();
        assert_eq!(brain.weights("a"), Some(&[2, 2][..]));
        assert_eq!(brain.recounts("a"), 1);
        assert_eq!(brain.total_recounts(), 1);
    }

    #[test]
    fn negative_total_is_reported() {
        let mut brain = seeded(3);
        let state = Fixed {
            key: "a",
            options: 1,
        };
        brain.get_move_index(&state).unwrap();
        brain.update("a", 0, -5);
        assert_eq!(brain.weights("a"), Some(&[-3][..]));

        let err = brain.get_move_index(&state).unwrap_err();
        assert!(matches!(err, Error::NegativeBeadTotal { total: -3, .. }));
    }

    #[test]
    fn clamp_floors_updates_at_zero() {
        let mut brain = Brain::new(BrainConfig::default().with_clamp_at_zero(true)).unwrap();
        brain.reseed(Some(4));
        let state = Fixed {
            key: "a",
            options: 2,
        };
        brain.get_move_index(&state).unwrap();
        brain.update("a", 1, -10);
        assert_eq!(brain.weights("a"), Some(&[2, 0][..]));
    }

    #[test]
    fn option_count_mismatch_keeps_vector() {
        let mut brain = seeded(5);
        brain
            .get_move_index(&Fixed {
                key: "a",
                options: 3,
            })
            .unwrap();
        let err = brain
            .get_move_index(&Fixed {
                key: "a",
                options: 5,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            Error::OptionCountMismatch {
                expected: 3,
                got: 5,
                ..
            }
        ));
        assert_eq!(brain.weights("a").map(<[i64]>::len), Some(3));
    }

    #[test]
    fn empty_options_rejected() {
        let mut brain = seeded(6);
        let err = brain
            .get_move_index(&Fixed {
                key: "done",
                options: 0,
            })
            .unwrap_err();
        assert!(matches!(err, Error::NoOptions { .. }));
        assert!(brain.is_empty());
    }

    #[test]
    #[should_panic(expected = "unknown state")]
    fn update_unknown_key_panics() {
        let mut brain = seeded(7);
        brain.update("never-seen", 0, 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn update_out_of_range_panics() {
        let mut brain = seeded(8);
        brain
            .get_move_index(&Fixed {
                key: "a",
                options: 2,
            })
            .unwrap();
        brain.update("a", 2, 1);
    }

    #[test]
    fn initial_beads_override_only_affects_new_states() {
        let mut brain = seeded(9);
        brain
            .get_move_index(&Fixed {
                key: "old",
                options: 2,
            })
            .unwrap();
        brain.set_initial_beads(10).unwrap();
        brain
            .get_move_index(&Fixed {
                key: "new",
                options: 2,
            })
            .unwrap();
        assert_eq!(brain.weights("old"), Some(&[2, 2][..]));
        assert_eq!(brain.weights("new"), Some(&[10, 10][..]));
        assert!(brain.set_initial_beads(0).is_err());
    }

    #[test]
    fn dump_restore_roundtrip() {
        let mut brain = seeded(10);
        brain
            .get_move_index(&Fixed {
                key: "a",
                options: 3,
            })
            .unwrap();
        brain.update("a", 2, 3);
        brain.update("a", 0, -4);

        let restored = Brain::restore(&brain.dump().unwrap()).unwrap();
        assert_eq!(restored, brain);
        assert_eq!(restored.weights("a"), Some(&[-2, 2, 5][..]));
    }

    #[test]
    fn restore_rejects_zero_initial_beads() {
        let err = Brain::restore(r#"{"initial_beads":0,"memory":{}}"#).unwrap_err();
        assert!(err.to_string().contains("initial_beads"));
    }

    #[test]
    fn stats_count_collapsed_states() {
        let mut brain = seeded(11);
        for key in ["a", "b"] {
            brain.get_move_index(&Fixed { key, options: 1 }).unwrap();
        }
        brain.update("b", 0, -2);
        let stats = brain.stats();
        assert_eq!(stats.states, 2);
        assert_eq!(stats.total_beads, 2);
        assert_eq!(stats.collapsed_states, 1);
    }
}
