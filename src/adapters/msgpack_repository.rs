//! MessagePack implementation of the brain repository.
//!
//! This adapter implements the BrainRepository port using rmp_serde for
//! compact binary serialization.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{Result, brain::Brain, error::Error, ports::BrainRepository};

/// MessagePack-based brain repository.
///
/// The default on-disk format: compact, and fast to load for brains with
/// thousands of states.
///
/// # Examples
///
/// ```no_run
/// use menace_brain::adapters::MsgPackRepository;
/// use menace_brain::ports::BrainRepository;
/// use menace_brain::{Brain, BrainConfig};
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let brain = Brain::new(BrainConfig::default())?;
///
/// repo.save(&brain, Path::new("menace.brain"))?;
/// let loaded = repo.load(Path::new("menace.brain"))?;
/// # Ok::<(), menace_brain::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl BrainRepository for MsgPackRepository {
    fn save(&self, brain: &Brain, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write_named(&mut writer, brain).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize brain to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })
    }

    fn load(&self, path: &Path) -> Result<Brain> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        rmp_serde::decode::from_read(BufReader::new(file)).map_err(|e| {
            Error::SerializationContext {
                operation: "deserialize brain from MessagePack".to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{BrainConfig, tictactoe::TicTacToe};

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("menace.brain");

        let repo = MsgPackRepository::new();
        let mut brain = Brain::new(BrainConfig::default().with_initial_beads(3)).unwrap();
        brain.reseed(Some(1));
        brain.get_move_index(&TicTacToe::new()).unwrap();
        brain.update(".........", 4, -7);

        repo.save(&brain, &file_path).expect("Failed to save");
        let loaded = repo.load(&file_path).expect("Failed to load");

        assert_eq!(loaded, brain);
        assert_eq!(loaded.weights(".........").unwrap()[4], -4);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = MsgPackRepository::new();
        let result = repo.load(Path::new("/tmp/nonexistent_12345.brain"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_corrupt_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("corrupt.brain");
        std::fs::write(&file_path, b"definitely not msgpack").unwrap();

        let result = MsgPackRepository::new().load(&file_path);
        assert!(matches!(result, Err(Error::SerializationContext { .. })));
    }
}
