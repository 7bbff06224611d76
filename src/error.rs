//! Error types for the MENACE brain crate

use thiserror::Error;

/// Main error type for the MENACE brain crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 1-9)")]
    InvalidPosition { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("state '{key}' is unresolved but offers no options")]
    NoOptions { key: String },

    #[error("invalid state key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error(
        "state '{key}' was first seen with {expected} options but now reports {got} \
         (state keys must be collision-free)"
    )]
    OptionCountMismatch {
        key: String,
        expected: usize,
        got: usize,
    },

    #[error("bead total for state '{key}' has drifted negative ({total})")]
    NegativeBeadTotal { key: String, total: i64 },

    #[error("no player is seated at index {seat} ({seats} players seated)")]
    UnknownSeat { seat: usize, seats: usize },

    #[error("brain lock poisoned while {operation}")]
    BrainLockPoisoned { operation: String },

    #[error("input closed")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
