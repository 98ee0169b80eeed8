//! Shared configuration snapshot for live reload.
//!
//! Consumers hold an `Arc<Config>` taken from [`SharedConfig::snapshot`]. A
//! reload builds a complete new [`Config`] and swaps it in atomically, so a
//! snapshot already handed out never changes underneath its holder.

use crate::config::Config;
use crate::error::Diagnostics;
use anyhow::Result;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct SharedConfig {
    current: ArcSwap<Config>,
    path: PathBuf,
    /// Problems reported by the most recent load.
    diagnostics: Mutex<Diagnostics>,
}

impl std::fmt::Debug for SharedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedConfig")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SharedConfig {
    pub fn new(config: Config, path: impl Into<PathBuf>) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
            path: path.into(),
            diagnostics: Mutex::new(Diagnostics::new()),
        }
    }

    /// Load the document at `path` into a new shared snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        let (config, diagnostics) = Config::load_from_path(path)?;
        Ok(Self::with_diagnostics(config, diagnostics, path))
    }

    /// Shared snapshot of an already loaded document.
    pub fn with_diagnostics(
        config: Config,
        diagnostics: Diagnostics,
        path: impl Into<PathBuf>,
    ) -> Self {
        let shared = Self::new(config, path);
        *shared.diagnostics.lock() = diagnostics;
        shared
    }

    /// The current configuration.
    pub fn snapshot(&self) -> Arc<Config> {
        self.current.load_full()
    }

    /// Install `config`, returning the snapshot it replaces.
    pub fn replace(&self, config: Config) -> Arc<Config> {
        self.current.swap(Arc::new(config))
    }

    /// Re-read the document and swap in the result.
    ///
    /// An unreadable file leaves the current snapshot in place. Problems
    /// inside the document do not prevent the swap; they are returned and
    /// remembered for [`SharedConfig::diagnostics`].
    pub fn reload(&self) -> Result<Diagnostics> {
        let (config, diagnostics) = Config::load_from_path(&self.path)?;
        self.replace(config);
        log::info!(
            "Reloaded configuration from {} ({} problem(s))",
            self.path.display(),
            diagnostics.len()
        );
        *self.diagnostics.lock() = diagnostics.clone();
        Ok(diagnostics)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics.lock().clone()
    }
}
