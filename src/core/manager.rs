//! Owner of the active watch session.

use crate::core::WatchSession;
use crate::error::Result;
use crate::signal::{ProcessSignal, ReloadNotifier};
use crate::sources::FileSet;
use arc_swap::ArcSwap;
use notify::{RecommendedWatcher, Watcher};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Manages the single active watch session.
///
/// Construct one manager at startup and hand it to whatever receives the
/// "configuration parsed" notification. Each [`rebuild`](Self::rebuild)
/// replaces the active session; the old one is fully stopped first.
///
/// # Examples
///
/// ```rust,no_run
/// use reload_notify::core::SessionManager;
/// use reload_notify::signal::ProcessSignal;
///
/// # async fn example() -> reload_notify::error::Result<()> {
/// let manager = SessionManager::with_signal(ProcessSignal::default());
///
/// // After every successful config parse:
/// manager.rebuild(&["Caddyfile", "sites/api.conf"]).await?;
///
/// // The config now lives in different files:
/// manager.rebuild(&["Caddyfile"]).await?;
///
/// manager.shutdown().await;
/// # Ok(())
/// # }
/// ```
pub struct SessionManager<W = RecommendedWatcher> {
    notifier: Arc<dyn ReloadNotifier>,
    /// The active session; held for the whole of a rebuild
    active: Mutex<Option<WatchSession<W>>>,
    /// Snapshot of the active session's registered paths for lock-free reads
    watched: ArcSwap<Vec<PathBuf>>,
}

impl SessionManager {
    /// Create a manager using the platform's recommended file watcher.
    pub fn new(notifier: Arc<dyn ReloadNotifier>) -> Self {
        Self::with_backend(notifier)
    }

    /// Create a manager that signals the current process on every change.
    pub fn with_signal(signal: ProcessSignal) -> Self {
        Self::new(Arc::new(signal))
    }
}

impl<W> SessionManager<W>
where
    W: Watcher + Send + 'static,
{
    /// Create a manager using watcher type `W`.
    pub fn with_backend(notifier: Arc<dyn ReloadNotifier>) -> Self {
        Self {
            notifier,
            active: Mutex::new(None),
            watched: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Replace the active session with one watching `files`.
    ///
    /// The previous session, if any, is stopped and its watcher released before
    /// the new watcher is created. Files that cannot be watched are logged and
    /// skipped; they never fail the rebuild. An empty file set is valid.
    ///
    /// Calls are serialised: a rebuild started while another is in progress
    /// waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::WatcherInit`](crate::error::WatchError::WatcherInit)
    /// if the watcher cannot be created. The previous session has already been
    /// stopped at that point, so no session is active afterwards.
    pub async fn rebuild<F>(&self, files: &F) -> Result<()>
    where
        F: FileSet + ?Sized,
    {
        let mut active = self.active.lock().await;

        if let Some(previous) = active.take() {
            self.watched.store(Arc::new(Vec::new()));
            previous.stop().await;
        }

        let session = WatchSession::<W>::start(files.files(), Arc::clone(&self.notifier))?;
        self.watched.store(Arc::new(session.paths().to_vec()));
        *active = Some(session);

        Ok(())
    }

    /// Stop the active session, if any.
    pub async fn shutdown(&self) {
        let mut active = self.active.lock().await;
        if let Some(session) = active.take() {
            self.watched.store(Arc::new(Vec::new()));
            session.stop().await;
        } else {
            debug!("No active watch session to stop");
        }
    }

    /// Whether a session is currently active.
    pub async fn is_active(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// Paths watched by the active session.
    ///
    /// Only successfully registered paths are included. Empty when no session
    /// is active.
    pub fn watched_paths(&self) -> Arc<Vec<PathBuf>> {
        self.watched.load_full()
    }
}
