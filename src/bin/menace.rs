//! MENACE CLI - train a matchbox brain or play against it
//!
//! ```text
//! menace -n 1000            # 1000 self-play games, saved to menace.brain
//! menace -i                 # play against the saved brain
//! menace -b brain.json -r   # JSON brain, never written back
//! ```

use anyhow::Result;
use clap::Parser;
use menace_brain::{app::SessionConfig, cli};

fn main() -> Result<()> {
    let config = SessionConfig::from(cli::Args::parse());

    let default_filter = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    cli::commands::execute(&config)
}
