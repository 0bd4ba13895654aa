//! The collaborators every screen talks to.

use bigfive_engine::{
    DocumentStore, IdentityProvider, LocalDocumentStore, LocalIdentity, QuizConfig,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Identity provider, document store and configuration, shared by screens.
///
/// Cloning is cheap; clones share the same collaborators.
#[derive(Clone)]
pub struct Services {
    /// Who is signed in
    pub identity: Arc<dyn IdentityProvider>,
    /// Where results are kept
    pub store: Arc<dyn DocumentStore>,
    /// Loaded settings
    pub config: QuizConfig,
}

impl Services {
    /// Wrap existing collaborators.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn DocumentStore>,
        config: QuizConfig,
    ) -> Self {
        Self {
            identity,
            store,
            config,
        }
    }

    /// Local collaborators that never touch disk, with default settings.
    pub fn in_memory() -> Self {
        Self::in_memory_with(QuizConfig::default())
    }

    /// Local in-memory collaborators with the given settings.
    pub fn in_memory_with(config: QuizConfig) -> Self {
        Self {
            identity: Arc::new(LocalIdentity::in_memory(config.min_password_length)),
            store: Arc::new(LocalDocumentStore::in_memory()),
            config,
        }
    }

    /// Local collaborators backed by files in `dir`.
    ///
    /// Creates the directory and a default `bigfive.toml` if missing.
    pub fn open(dir: impl AsRef<Path>) -> bigfive_engine::Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let config = QuizConfig::load_or_init(dir)?;
        let identity = LocalIdentity::open(dir, config.min_password_length)?;
        let store = LocalDocumentStore::open(dir)?;
        info!(target: "bigfive::config", dir = %dir.display(), "Data directory opened");
        Ok(Self {
            identity: Arc::new(identity),
            store: Arc::new(store),
            config,
        })
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
