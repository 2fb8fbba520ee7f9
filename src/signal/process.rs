//! Signal-the-current-process notifier.

use super::ReloadNotifier;
use crate::error::{Result, WatchError};
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use std::str::FromStr;

/// Signal sent to request a configuration reload when nothing else is configured.
pub const DEFAULT_RELOAD_SIGNAL: Signal = Signal::SIGUSR1;

/// Notifier that sends a signal to the current process.
///
/// # Examples
///
/// ```rust,no_run
/// use reload_notify::signal::{ProcessSignal, ReloadNotifier};
///
/// # fn example() -> reload_notify::error::Result<()> {
/// let notifier = ProcessSignal::from_name("SIGHUP")?;
/// notifier.notify_reload()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSignal {
    signal: Signal,
}

impl ProcessSignal {
    /// Create a notifier that sends `signal`.
    pub fn new(signal: Signal) -> Self {
        Self { signal }
    }

    /// Create a notifier from a signal name such as `"SIGUSR1"` or `"SIGHUP"`.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::UnknownSignal`] if the name is not a known signal.
    pub fn from_name(name: &str) -> Result<Self> {
        Signal::from_str(name)
            .map(Self::new)
            .map_err(|_| WatchError::UnknownSignal(name.to_string()))
    }

    /// The signal this notifier sends.
    pub fn signal(&self) -> Signal {
        self.signal
    }
}

impl Default for ProcessSignal {
    fn default() -> Self {
        Self::new(DEFAULT_RELOAD_SIGNAL)
    }
}

impl ReloadNotifier for ProcessSignal {
    fn notify_reload(&self) -> Result<()> {
        let pid = Pid::this();

        // Probe with the null signal first so a missing process is reported apart from a failed delivery
        kill(pid, None::<Signal>).map_err(|source| WatchError::ProcessLookup {
            pid: pid.as_raw(),
            source,
        })?;

        kill(pid, self.signal).map_err(|source| WatchError::SignalDelivery {
            signal: self.signal.as_str(),
            source,
        })
    }
}
