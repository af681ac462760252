//! Hot reload of the logger configuration file.
//!
//! The watcher observes the file's parent directory, so editors that save by
//! writing a temporary file and renaming it over the original are picked up.
//! A rewrite is only forwarded when it loads, validates, builds a
//! [`Dispatcher`] and differs from the last configuration forwarded.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::LoggerConfig;
use crate::dispatch::Dispatcher;

/// Watches a logger configuration file and streams accepted rewrites.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<LoggerConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and a receiver for configuration updates, suitable
    /// for [`Registry::apply_updates`](crate::dispatch::Registry::apply_updates).
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<LoggerConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start watching on notify's background thread.
    ///
    /// The configuration currently on disk counts as already applied, so
    /// only later changes are sent. Watching stops when the returned watcher
    /// is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let mut reload = Reload::new(&self.path);
        let dir = watched_dir(&self.path);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if reload.concerns(&event) => {
                    if let Some(config) = reload.reload() {
                        if tx.send(config).is_err() {
                            tracing::debug!("Logger config receiver dropped");
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "Logger config watch error"),
            },
            Config::default(),
        )?;

        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Logger config watcher started");
        Ok(watcher)
    }
}

fn watched_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Decides which file events lead to a new configuration.
struct Reload {
    path: PathBuf,
    last: Option<LoggerConfig>,
}

impl Reload {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            last: load_config(path).ok(),
        }
    }

    fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// True for a write or create touching the watched file.
    fn concerns(&self, event: &Event) -> bool {
        let Some(name) = self.file_name() else {
            return false;
        };
        (event.kind.is_modify() || event.kind.is_create())
            && event.paths.iter().any(|path| path.file_name() == Some(name))
    }

    /// Load the file, returning the configuration if it should be applied.
    fn reload(&mut self) -> Option<LoggerConfig> {
        let config = match load_config(&self.path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(
                    path = ?self.path,
                    "Failed to reload logger config: {}. Keeping current configuration.",
                    e
                );
                return None;
            }
        };

        if let Err(e) = Dispatcher::from_config(&config) {
            tracing::error!(path = ?self.path, "Logger config cannot be applied: {}", e);
            return None;
        }

        if self.last.as_ref() == Some(&config) {
            tracing::debug!(path = ?self.path, "Logger config unchanged");
            return None;
        }

        tracing::info!(path = ?self.path, level = %config.level, "Logger config change detected");
        self.last = Some(config.clone());
        Some(config)
    }
}
