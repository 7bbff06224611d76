//! Application layer: configuration and the dependency injection container.
//!
//! ```text
//! SessionConfig ──► App ──owns──► Arc<dyn BrainRepository>
//!                    │                 ▲ implemented by
//!                    │                 │ MsgPackRepository / JsonRepository
//!                    │                 │ InMemoryRepository (testing)
//!                    └──hands out──► Brain
//! ```

pub mod config;
pub mod container;

pub use config::{OpponentKind, SessionConfig};
pub use container::{App, AppBuilder};
