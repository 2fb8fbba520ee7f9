//! # reload-notify
//!
//! Watch the files a configuration was built from and signal the running
//! process to reload when any of them changes.
//!
//! ## Overview
//!
//! A long-running server re-parses its configuration on a reload signal. This
//! crate closes the loop: after each parse the server hands over the list of
//! files the configuration came from, and every change to one of those files
//! produces a reload signal to the current process.
//!
//! - One active watch session at a time, replaced wholesale on every parse
//! - The old session is fully stopped before the new one starts
//! - Per-file watch failures are logged, never fatal
//! - One reload signal per change event, no debouncing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reload_notify::prelude::*;
//!
//! # async fn example() -> reload_notify::error::Result<()> {
//! let manager = SessionManager::with_signal(ProcessSignal::default());
//!
//! // Call after every successful configuration parse
//! manager.rebuild(&["Caddyfile", "sites/api.conf"]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Platform support
//!
//! Watching and signalling are only available on Unix targets.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod error;
pub mod settings;
pub mod sources;

#[cfg(unix)]
pub mod core;

#[cfg(unix)]
pub mod hook;

#[cfg(unix)]
pub mod signal;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::error::{Result, WatchError};
    pub use crate::settings::WatchSettings;
    pub use crate::sources::{FileSet, ServerBlock, ServerBlocks};

    #[cfg(unix)]
    pub use crate::core::SessionManager;
    #[cfg(unix)]
    pub use crate::hook::{HostEvent, ReloadHook};
    #[cfg(unix)]
    pub use crate::signal::{ProcessSignal, ReloadNotifier};
}
