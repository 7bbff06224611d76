//! In-memory brain repository for testing.
//!
//! This adapter provides a pure in-memory implementation of BrainRepository,
//! enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{Result, brain::Brain, error::Error, ports::BrainRepository};

/// In-memory repository for testing.
///
/// Stores MessagePack-encoded brains in a shared map keyed by path, so
/// round-trips exercise the same serialization as the file adapter.
///
/// # Examples
///
/// ```
/// use menace_brain::adapters::InMemoryRepository;
/// use menace_brain::ports::BrainRepository;
/// use menace_brain::{Brain, BrainConfig};
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let brain = Brain::new(BrainConfig::default())?;
///
/// repo.save(&brain, Path::new("test_brain"))?;
/// let loaded = repo.load(Path::new("test_brain"))?;
/// assert_eq!(loaded, brain);
/// # Ok::<(), menace_brain::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of brains currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Check if a brain exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&Self::key(path))
    }

    /// Store raw bytes at a path, e.g. to simulate a corrupt file.
    pub fn insert_raw(&self, path: &Path, bytes: Vec<u8>) {
        self.storage().insert(Self::key(path), bytes);
    }

    fn key(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // The map is only touched by whole-entry inserts and reads, so a
        // poisoned lock still holds consistent data.
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BrainRepository for InMemoryRepository {
    fn save(&self, brain: &Brain, path: &Path) -> Result<()> {
        let bytes = rmp_serde::to_vec_named(brain).map_err(|e| Error::SerializationContext {
            operation: "serialize brain for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage().insert(Self::key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Brain> {
        let storage = self.storage();
        let bytes = storage.get(&Self::key(path)).ok_or_else(|| Error::Io {
            operation: format!("load brain from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize brain from in-memory storage".to_string(),
            message: e.to_string(),
        })
    }
}
