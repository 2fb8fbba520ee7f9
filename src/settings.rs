//! Startup settings for the watch-and-notify feature.

use crate::error::{Result, WatchError};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Default environment variable prefix (`RELOAD_NOTIFY_ENABLED`, `RELOAD_NOTIFY_SIGNAL`).
pub const DEFAULT_ENV_PREFIX: &str = "RELOAD_NOTIFY";

fn default_signal() -> String {
    "SIGUSR1".to_string()
}

/// Settings controlling whether configuration files are watched and which signal
/// a change produces.
///
/// Watching is off unless explicitly enabled.
///
/// # Examples
///
/// ```rust,no_run
/// use reload_notify::settings::WatchSettings;
/// use std::path::Path;
///
/// # fn example() -> reload_notify::error::Result<()> {
/// // Defaults < reload.toml < RELOAD_NOTIFY_* environment variables
/// let settings = WatchSettings::load(Some(Path::new("reload.toml")), "RELOAD_NOTIFY")?;
/// if settings.enabled {
///     println!("watching, reload signal {}", settings.signal);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchSettings {
    /// Whether configuration files are watched at all
    #[serde(default)]
    pub enabled: bool,
    /// Name of the signal sent to the current process on change
    #[serde(default = "default_signal")]
    pub signal: String,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            signal: default_signal(),
        }
    }
}

impl WatchSettings {
    /// Load settings from an optional file and the environment.
    ///
    /// Environment variables take precedence over the file, which takes
    /// precedence over the defaults. The file format is detected from its
    /// extension (`.yaml`, `.yml`, `.toml`, `.json`).
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::Settings`] if the file cannot be read or a value
    /// has the wrong type.
    pub fn load(file: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| WatchError::Settings(format!("Failed to build settings: {}", e)))?;

        config
            .try_deserialize()
            .map_err(|e| WatchError::Settings(format!("Failed to deserialize settings: {}", e)))
    }

    /// Override the enable flag, as the `--notify` command line flag does.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Override the signal name.
    pub fn with_signal(mut self, signal: impl Into<String>) -> Self {
        self.signal = signal.into();
        self
    }

    /// Resolve the configured signal name.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::UnknownSignal`] if the name is not a known signal.
    #[cfg(unix)]
    pub fn reload_signal(&self) -> Result<crate::signal::ProcessSignal> {
        crate::signal::ProcessSignal::from_name(&self.signal)
    }
}
