//! JSON implementation of the brain repository.
//!
//! Human-readable and diffable; selected for paths ending in `.json`.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{Result, brain::Brain, error::Error, ports::BrainRepository};

/// JSON-based brain repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    /// Create a new JSON repository.
    pub fn new() -> Self {
        Self
    }
}

impl BrainRepository for JsonRepository {
    fn save(&self, brain: &Brain, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, brain)?;
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
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{BrainConfig, tictactoe::TicTacToe};

    #[test]
    fn test_json_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("menace.json");

        let mut brain = Brain::new(BrainConfig::default()).unwrap();
        brain.reseed(Some(5));
        brain.get_move_index(&TicTacToe::new()).unwrap();

        let repo = JsonRepository::new();
        repo.save(&brain, &file_path).unwrap();
        let loaded = repo.load(&file_path).unwrap();
        assert_eq!(loaded, brain);

        let text = std::fs::read_to_string(&file_path).unwrap();
        assert!(text.contains("\"initial_beads\""));
        assert!(text.contains("\".........\""));
    }

    #[test]
    fn test_truncated_file_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("truncated.json");
        std::fs::write(&file_path, "{\"initial_beads\": 2, \"memory\": {").unwrap();

        let result = JsonRepository::new().load(&file_path);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
