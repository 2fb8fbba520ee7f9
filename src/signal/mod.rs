//! Reload notification delivery.
//!
//! A [`ReloadNotifier`] is what a watch session calls once per observed change.
//! The production implementation, [`ProcessSignal`], sends a signal to the
//! current process so that the host's own signal handling performs the reload.

mod process;

pub use process::{DEFAULT_RELOAD_SIGNAL, ProcessSignal};

use crate::error::Result;

/// Delivers a "reload configuration" notification.
///
/// Implementations must be cheap to call repeatedly: every change event results
/// in one call, with no deduplication.
pub trait ReloadNotifier: Send + Sync + 'static {
    /// Deliver one reload notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered. Callers log
    /// the error and carry on.
    fn notify_reload(&self) -> Result<()>;
}
