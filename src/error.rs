//! Error types for reload-notify.

use std::path::PathBuf;

/// Result type alias for reload-notify operations.
pub type Result<T> = std::result::Result<T, WatchError>;

/// Errors that can occur while watching configuration files or signalling a reload.
///
/// Only [`WatchError::WatcherInit`] is ever returned from a rebuild. The other
/// variants describe failures that are logged by the session and then skipped.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// The underlying file watcher could not be created.
    #[error("Failed to create file watcher: {0}")]
    WatcherInit(#[source] notify::Error),

    /// A single path could not be registered with the watcher.
    #[error("Unable to watch file {path:?}: {source}")]
    Register {
        /// The path that failed to register
        path: PathBuf,
        /// The watcher error
        #[source]
        source: notify::Error,
    },

    #[cfg(unix)]
    /// The current process could not be resolved.
    #[error("Unable to find process ID {pid}: {source}")]
    ProcessLookup {
        /// Process identifier that was looked up
        pid: i32,
        /// OS error returned by the lookup
        #[source]
        source: nix::errno::Errno,
    },

    #[cfg(unix)]
    /// The reload signal could not be delivered.
    #[error("Sending reload signal {signal}: {source}")]
    SignalDelivery {
        /// Name of the signal that was sent
        signal: &'static str,
        /// OS error returned by the delivery
        #[source]
        source: nix::errno::Errno,
    },

    /// A signal name did not match any known signal.
    #[error("Unknown signal name: {0}")]
    UnknownSignal(String),

    /// Watch settings could not be loaded.
    #[error("Failed to load watch settings: {0}")]
    Settings(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
