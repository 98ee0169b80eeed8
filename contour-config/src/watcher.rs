//! File watcher driving `live_config` reloads.
//!
//! Editors often write a file several times in quick succession (or save via
//! rename), so change notifications are debounced before they are queued.

use crate::error::Diagnostics;
use crate::shared::SharedConfig;
use anyhow::{Context, Result};
use notify::{Config as NotifyConfig, Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// Debounce window used by [`ConfigWatcher::with_default_debounce`].
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// The watched document changed on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChange {
    pub path: PathBuf,
}

/// Drops events arriving within `window` of the last admitted one.
#[derive(Debug)]
struct Debouncer {
    window: Duration,
    last: Mutex<Option<Instant>>,
}

impl Debouncer {
    fn new(window: Duration) -> Self {
        Self {
            window,
            last: Mutex::new(None),
        }
    }

    fn admit(&self, now: Instant) -> bool {
        let mut last = self.last.lock();
        match *last {
            Some(previous) if now.duration_since(previous) < self.window => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}

/// Everything an event callback needs; cloned once per watcher backend.
#[derive(Clone)]
struct ChangeFilter {
    file_name: OsString,
    path: PathBuf,
    debouncer: Arc<Debouncer>,
    tx: Sender<ConfigChange>,
}

impl ChangeFilter {
    fn handle(&self, result: notify::Result<Event>) {
        let event = match result {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Config watcher error: {e}");
                return;
            }
        };

        // Create covers editors that save by renaming a temp file over ours.
        if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
            return;
        }
        if !event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(self.file_name.as_os_str()))
        {
            return;
        }
        if !self.debouncer.admit(Instant::now()) {
            log::trace!("Debounced change event for {}", self.path.display());
            return;
        }

        log::info!("Config file changed: {}", self.path.display());
        let change = ConfigChange {
            path: self.path.clone(),
        };
        if let Err(e) = self.tx.send(change) {
            log::error!("Failed to queue config change: {e}");
        }
    }
}

/// Watches one configuration document.
pub struct ConfigWatcher {
    _backend: Box<dyn Watcher + Send>,
    changes: Receiver<ConfigChange>,
}

impl std::fmt::Debug for ConfigWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigWatcher").finish_non_exhaustive()
    }
}

impl ConfigWatcher {
    /// Start watching `path`, which must exist.
    ///
    /// The platform's native backend is preferred. Where it cannot start
    /// (containers, network filesystems) a polling backend is used instead.
    pub fn new(path: &Path, debounce: Duration) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let file_name = path
            .file_name()
            .context("Config path has no file name")?
            .to_os_string();
        let directory = path
            .parent()
            .context("Config path has no parent directory")?
            .to_path_buf();

        let (tx, changes) = channel();
        let filter = ChangeFilter {
            file_name,
            path: path.clone(),
            debouncer: Arc::new(Debouncer::new(debounce)),
            tx,
        };

        // The directory is watched rather than the file so that a rename
        // over the file keeps being observed.
        let mut backend = Self::start_backend(filter)?;
        backend
            .watch(&directory, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", directory.display()))?;

        log::info!("Watching {} for changes", path.display());
        Ok(Self {
            _backend: backend,
            changes,
        })
    }

    pub fn with_default_debounce(path: &Path) -> Result<Self> {
        Self::new(path, DEFAULT_DEBOUNCE)
    }

    fn start_backend(filter: ChangeFilter) -> Result<Box<dyn Watcher + Send>> {
        let native = filter.clone();
        match notify::recommended_watcher(move |result| native.handle(result)) {
            Ok(watcher) => {
                log::debug!("Config watcher: native backend");
                Ok(Box::new(watcher))
            }
            Err(e) => {
                log::warn!("Config watcher: native backend unavailable ({e}), polling instead");
                let watcher = PollWatcher::new(
                    move |result| filter.handle(result),
                    NotifyConfig::default().with_poll_interval(POLL_INTERVAL),
                )
                .context("Failed to create polling config watcher")?;
                Ok(Box::new(watcher))
            }
        }
    }

    /// Next pending change, without blocking.
    pub fn try_recv(&self) -> Option<ConfigChange> {
        self.changes.try_recv().ok()
    }

    /// Drain pending changes and, if there were any, reload `shared` once.
    ///
    /// Returns `None` when nothing changed.
    pub fn reload_if_changed(&self, shared: &SharedConfig) -> Option<Result<Diagnostics>> {
        let mut changed = false;
        while self.try_recv().is_some() {
            changed = true;
        }
        changed.then(|| shared.reload())
    }
}
