//! Command-line front end
//!
//! Parses arguments into a [`SessionConfig`](crate::app::SessionConfig) and
//! runs either an interactive game loop or a self-play session.

pub mod args;
pub mod commands;
pub mod output;

pub use args::Args;
