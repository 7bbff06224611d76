//! Repository port for brain persistence.
//!
//! This module defines the trait boundary between the learning engine and
//! the storage layer.

use std::path::Path;

use crate::{Result, brain::Brain};

/// Port for persisting and loading brains.
///
/// This trait abstracts the storage mechanism, allowing different
/// implementations (MessagePack, JSON, in-memory) without coupling the
/// engine to a specific serialization format. Every implementation must
/// round-trip exactly: loading what was saved reproduces the same
/// `initial_beads` and the same bead vectors for every state key.
///
/// # Examples
///
/// ```no_run
/// use menace_brain::ports::BrainRepository;
/// use menace_brain::Brain;
/// use std::path::Path;
///
/// fn save_brain<R: BrainRepository>(
///     repo: &R,
///     brain: &Brain,
///     path: &Path,
/// ) -> menace_brain::Result<()> {
///     repo.save(brain, path)
/// }
/// ```
pub trait BrainRepository {
    /// Save a brain to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path cannot be created or written to
    /// - Serialization fails
    fn save(&self, brain: &Brain, path: &Path) -> Result<()>;

    /// Load a brain from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file format is invalid or corrupted
    fn load(&self, path: &Path) -> Result<Brain>;
}
