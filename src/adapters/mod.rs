//! Adapters implementing domain ports.
//!
//! Storage backends for [`crate::ports::BrainRepository`].

pub mod in_memory_repository;
pub mod json_repository;
pub mod msgpack_repository;

use std::{path::Path, sync::Arc};

pub use in_memory_repository::InMemoryRepository;
pub use json_repository::JsonRepository;
pub use msgpack_repository::MsgPackRepository;

use crate::ports::BrainRepository;

/// Pick a repository from the file extension: `.json` is stored as JSON,
/// everything else as MessagePack.
pub fn repository_for_path(path: &Path) -> Arc<dyn BrainRepository + Send + Sync> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Arc::new(JsonRepository::new()),
        _ => Arc::new(MsgPackRepository::new()),
    }
}
