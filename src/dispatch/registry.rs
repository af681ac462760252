//! Process-wide, hot-swappable dispatcher.

use std::sync::{Arc, Condvar, LazyLock, Mutex, PoisonError};
use std::thread::{self, ThreadId};

use arc_swap::{ArcSwap, Guard};
use tokio::sync::mpsc;

use super::dispatcher::Dispatcher;
use crate::config::LoggerConfig;
use crate::sink::LogSink;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::default);

/// Holder for the currently installed [`Dispatcher`].
///
/// Reads are a lock-free `arc-swap` load; installs replace the whole
/// dispatcher atomically.
#[derive(Debug)]
pub struct Registry {
    current: ArcSwap<Dispatcher>,
    overrides: Mutex<OverrideOwner>,
    released: Condvar,
}

/// The thread whose [`OverrideGuard`]s are live, and how many.
#[derive(Debug, Default)]
struct OverrideOwner {
    thread: Option<ThreadId>,
    depth: usize,
}

impl Registry {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            current: ArcSwap::from_pointee(dispatcher),
            overrides: Mutex::new(OverrideOwner::default()),
            released: Condvar::new(),
        }
    }

    /// The registry used by the free logging functions and macros.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Borrow the installed dispatcher for the duration of a call.
    pub fn load(&self) -> Guard<Arc<Dispatcher>> {
        self.current.load()
    }

    /// Clone out the installed dispatcher.
    pub fn load_full(&self) -> Arc<Dispatcher> {
        self.current.load_full()
    }

    /// Replace the installed dispatcher, returning the previous one.
    pub fn install(&self, dispatcher: Dispatcher) -> Arc<Dispatcher> {
        self.current.swap(Arc::new(dispatcher))
    }

    /// Put back a dispatcher previously returned by [`Registry::install`].
    pub fn restore(&self, previous: Arc<Dispatcher>) {
        self.current.store(previous);
    }

    /// Route this registry to `sink` until the returned guard is dropped.
    ///
    /// Overrides from different threads are serialized: a call blocks while
    /// another thread holds a guard, so concurrently running tests never
    /// observe each other's sinks. The owning thread may stack further
    /// overrides; dropping them in reverse order restores each level.
    pub fn override_sink(&self, sink: Arc<dyn LogSink>) -> OverrideGuard<'_> {
        self.acquire_override();
        let previous = self.install(Dispatcher::new(sink));
        OverrideGuard {
            registry: self,
            previous: Some(previous),
        }
    }

    fn acquire_override(&self) {
        let me = thread::current().id();
        let mut owner = self.overrides.lock().unwrap_or_else(PoisonError::into_inner);
        while owner.thread.is_some_and(|thread| thread != me) {
            owner = self
                .released
                .wait(owner)
                .unwrap_or_else(PoisonError::into_inner);
        }
        owner.thread = Some(me);
        owner.depth += 1;
    }

    fn release_override(&self) {
        let mut owner = self.overrides.lock().unwrap_or_else(PoisonError::into_inner);
        owner.depth = owner.depth.saturating_sub(1);
        if owner.depth == 0 {
            owner.thread = None;
            self.released.notify_all();
        }
    }

    /// Apply configuration updates until the channel closes.
    ///
    /// Updates that fail to build a dispatcher are logged and skipped; the
    /// current dispatcher stays in place.
    pub async fn apply_updates(&self, mut updates: mpsc::UnboundedReceiver<LoggerConfig>) {
        while let Some(config) = updates.recv().await {
            match Dispatcher::from_config(&config) {
                Ok(dispatcher) => {
                    self.install(dispatcher);
                    tracing::info!(
                        sink = ?config.sink,
                        level = %config.level,
                        "Logger configuration applied"
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to apply logger config: {}. Keeping current dispatcher.", e);
                }
            }
        }
        tracing::debug!("Logger configuration channel closed");
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Dispatcher::default())
    }
}

/// Borrow the globally installed dispatcher.
pub fn current() -> Guard<Arc<Dispatcher>> {
    GLOBAL.load()
}

/// Install a dispatcher globally, returning the previous one.
pub fn install(dispatcher: Dispatcher) -> Arc<Dispatcher> {
    GLOBAL.install(dispatcher)
}

/// Route global logging to `sink` until the returned guard is dropped.
pub fn override_sink(sink: Arc<dyn LogSink>) -> OverrideGuard<'static> {
    GLOBAL.override_sink(sink)
}

/// Restores a registry's previous dispatcher on drop.
#[must_use = "the override is undone as soon as the guard is dropped"]
pub struct OverrideGuard<'a> {
    registry: &'a Registry,
    previous: Option<Arc<Dispatcher>>,
}

impl OverrideGuard<'_> {
    /// Restore the previous dispatcher now. Dropping afterwards is a no-op.
    pub fn restore(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.registry.restore(previous);
        }
    }
}

impl Drop for OverrideGuard<'_> {
    fn drop(&mut self) {
        self.restore();
        self.registry.release_override();
    }
}
