//! Session commands: interactive play and self-play training

pub mod play;
pub mod train;

use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::{
    adapters::repository_for_path,
    app::{App, AppBuilder, SessionConfig},
    brain::Brain,
    pipeline::Checkpoint,
};

/// Run the session `config` describes.
pub fn execute(config: &SessionConfig) -> Result<()> {
    if config.interactive {
        play::execute(config)
    } else {
        train::execute(config)
    }
}

/// App wired to the storage format implied by the brain path.
fn app_for(config: &SessionConfig) -> App {
    AppBuilder::new()
        .with_shared_repository(repository_for_path(&config.brain_path))
        .with_optional_seed(config.seed)
        .build()
}

/// Load (or create) the session's brain for sharing between players.
fn shared_brain(app: &App, config: &SessionConfig) -> Result<Arc<Mutex<Brain>>> {
    let brain = app.load_or_create(
        &config.brain_path,
        config.brain_config(),
        config.initial_beads,
    )?;
    Ok(Arc::new(Mutex::new(brain)))
}

fn checkpoint(
    app: &App,
    config: &SessionConfig,
    brain: &Arc<Mutex<Brain>>,
) -> Option<Checkpoint> {
    config
        .persists()
        .then(|| Checkpoint::new(Arc::clone(brain), app.repository(), &config.brain_path))
}
