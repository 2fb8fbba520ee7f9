//! Background loop that turns watcher events into reload notifications.

use crate::signal::ReloadNotifier;
use notify::Event;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

/// Raw watcher output: `Ok` is a change event, `Err` an internal watcher error.
pub(crate) type WatchEvent = notify::Result<Event>;

/// Forward watcher events until `stop` fires.
///
/// Every change event produces exactly one reload notification attempt.
/// Access events (open, read, close) are not changes and are skipped, so a
/// host re-reading its configuration does not signal itself again. Failures are logged and never end the loop; only the stop signal (or its
/// sender being dropped) does. Stop is polled first, so once it is pending no
/// further event is handled.
pub(crate) async fn forward_events(
    mut events: mpsc::UnboundedReceiver<WatchEvent>,
    mut stop: oneshot::Receiver<()>,
    notifier: Arc<dyn ReloadNotifier>,
) {
    loop {
        tokio::select! {
            biased;

            _ = &mut stop => {
                debug!("Watch session stop requested");
                return;
            }

            Some(result) = events.recv() => match result {
                Ok(event) if event.kind.is_access() => {
                    debug!(kind = ?event.kind, paths = ?event.paths, "Ignoring access event");
                }
                Ok(event) => {
                    info!(kind = ?event.kind, paths = ?event.paths, "Config file event");
                    if let Err(e) = notifier.notify_reload() {
                        error!(error = %e, "Failed to deliver reload notification");
                    }
                }
                Err(e) => {
                    error!(error = %e, "File watcher error");
                }
            },
        }
    }
}
