//! Dependency injection container for the engine.
//!
//! The container owns infrastructure dependencies (the brain repository)
//! and hands out domain objects wired to them.

use std::{path::Path, sync::Arc};

use crate::{
    Result,
    adapters::MsgPackRepository,
    brain::{Brain, BrainConfig},
    ports::BrainRepository,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use menace_brain::BrainConfig;
/// use menace_brain::app::App;
/// use std::path::Path;
///
/// let app = App::new();
/// let brain = app.load_or_create(Path::new("menace.brain"), BrainConfig::default(), None)?;
/// app.save_brain(&brain, Path::new("menace.brain"))?;
/// # Ok::<(), menace_brain::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use menace_brain::app::App;
/// use menace_brain::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// assert_eq!(app.default_seed(), Some(42));
/// ```
pub struct App {
    /// Repository for brain persistence
    repository: Arc<dyn BrainRepository + Send + Sync>,
    /// Seed for brains handed out (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app backed by `MsgPackRepository` with no default seed.
    pub fn new() -> Self {
        Self {
            repository: Arc::new(MsgPackRepository::new()),
            default_seed: None,
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn default_seed(&self) -> Option<u64> {
        self.default_seed
    }

    /// Shared handle to the repository, e.g. for checkpointing.
    pub fn repository(&self) -> Arc<dyn BrainRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    /// Load the brain at `path`, or start a fresh one if that fails.
    ///
    /// A missing or unreadable file is not an error: it is logged and a new
    /// brain is built from `config`. `beads_override`, if given, replaces the
    /// stored initial bead count of a loaded brain (existing states keep
    /// their weights). The returned brain is seeded with the app's default
    /// seed and uses `config`'s zero floor.
    ///
    /// # Errors
    /// Returns an error only if `config` or `beads_override` is invalid.
    pub fn load_or_create(
        &self,
        path: &Path,
        config: BrainConfig,
        beads_override: Option<u32>,
    ) -> Result<Brain> {
        let mut brain = match Brain::load(self.repository.as_ref(), path) {
            Ok(mut brain) => {
                if let Some(beads) = beads_override {
                    brain.set_initial_beads(beads)?;
                }
                brain.set_clamp_at_zero(config.clamp_at_zero);
                brain
            }
            Err(err) => {
                log::warn!(
                    "could not load brain from {}: {err}; starting a new one",
                    path.display()
                );
                let config = match beads_override {
                    Some(beads) => config.with_initial_beads(beads),
                    None => config,
                };
                Brain::new(config)?
            }
        };
        brain.reseed(self.default_seed);
        Ok(brain)
    }

    /// Save a brain through the configured repository.
    pub fn save_brain(&self, brain: &Brain, path: &Path) -> Result<()> {
        brain.persist(self.repository.as_ref(), path)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an app with custom dependencies.
pub struct AppBuilder {
    repository: Option<Arc<dyn BrainRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            default_seed: None,
        }
    }

    /// Set a custom brain repository.
    pub fn with_repository<R: BrainRepository + Send + Sync + 'static>(self, repo: R) -> Self {
        self.with_shared_repository(Arc::new(repo))
    }

    /// Set a repository that is already shared elsewhere.
    pub fn with_shared_repository(mut self, repo: Arc<dyn BrainRepository + Send + Sync>) -> Self {
        self.repository = Some(repo);
        self
    }

    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Like [`with_default_seed`](Self::with_default_seed), leaving the app
    /// unseeded for `None`.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.default_seed = seed;
        self
    }

    /// Build the app. Without a repository, uses `MsgPackRepository`.
    pub fn build(self) -> App {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(MsgPackRepository::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
