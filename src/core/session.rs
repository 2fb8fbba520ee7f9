//! A single watch session: one watcher, one forwarding task, one stop signal.

use crate::core::forwarder::{WatchEvent, forward_events};
use crate::error::{Result, WatchError};
use crate::signal::ReloadNotifier;
use notify::{RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, error, info};

/// An active watch over a fixed set of files.
///
/// The session exclusively owns its watcher and its forwarding task. The file
/// set cannot change; watching different files means starting a new session.
pub(crate) struct WatchSession<W> {
    watcher: W,
    paths: Vec<PathBuf>,
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl<W> WatchSession<W>
where
    W: Watcher + Send + 'static,
{
    /// Create a watcher, register `files` with it and start forwarding events.
    ///
    /// Registration is best-effort: a path that cannot be watched is logged and
    /// skipped. Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::WatcherInit`] if the watcher cannot be created. No
    /// task is spawned in that case.
    pub(crate) fn start(files: Vec<PathBuf>, notifier: Arc<dyn ReloadNotifier>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<WatchEvent>();

        let mut watcher = W::new(
            move |res: WatchEvent| {
                // Receiver is gone only once the session is stopping
                let _ = event_tx.send(res);
            },
            notify::Config::default(),
        )
        .map_err(WatchError::WatcherInit)?;

        let mut paths = Vec::with_capacity(files.len());
        for path in files {
            match watcher.watch(&path, RecursiveMode::NonRecursive) {
                Ok(()) => paths.push(path),
                Err(source) => {
                    let err = WatchError::Register { path, source };
                    error!(error = %err, "Unable to watch file");
                }
            }
        }

        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(forward_events(event_rx, stop_rx, notifier).in_current_span());

        info!(watched = paths.len(), "Watch session started");

        Ok(Self {
            watcher,
            paths,
            stop: stop_tx,
            task,
        })
    }

    /// Paths that were successfully registered.
    pub(crate) fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Stop the forwarding task, wait for it to exit, then release the watcher.
    pub(crate) async fn stop(self) {
        let Self {
            watcher,
            paths,
            stop,
            task,
        } = self;

        // Err means the task already exited and dropped its receiver
        let _ = stop.send(());

        if let Err(e) = task.await {
            error!(error = %e, "Watch session task failed");
        }

        drop(watcher);
        debug!(watched = paths.len(), "Watch session stopped");
    }
}
