//! Host lifecycle hook.
//!
//! The host server emits lifecycle events; the integration layer forwards them
//! to [`ReloadHook::handle`]. The hook owns the [`SessionManager`] and rebuilds
//! the watch every time the configuration is parsed.

use crate::core::SessionManager;
use crate::error::Result;
use crate::settings::WatchSettings;
use crate::sources::{FileSet, ServerBlocks};
use notify::{RecommendedWatcher, Watcher};
use tracing::debug;

/// Lifecycle events a host delivers to its hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The host is starting up.
    Startup,
    /// The configuration was parsed into these blocks.
    ConfigParsed(ServerBlocks),
    /// The host is shutting down.
    Shutdown,
}

/// Hook that keeps a watch on the files of the most recently parsed configuration.
///
/// A disabled hook ignores every event and never creates a session.
///
/// # Examples
///
/// ```rust,no_run
/// use reload_notify::hook::{HostEvent, ReloadHook};
/// use reload_notify::settings::WatchSettings;
/// use reload_notify::sources::{ServerBlock, ServerBlocks};
///
/// # async fn example() -> reload_notify::error::Result<()> {
/// let settings = WatchSettings::default().with_enabled(true);
/// let hook = ReloadHook::from_settings(&settings)?;
///
/// let blocks = ServerBlocks::new(vec![ServerBlock::new(["example.com"], "Caddyfile")]);
/// hook.handle(&HostEvent::ConfigParsed(blocks)).await?;
/// # Ok(())
/// # }
/// ```
pub struct ReloadHook<W = RecommendedWatcher> {
    manager: Option<SessionManager<W>>,
}

impl ReloadHook {
    /// Build a hook from startup settings.
    ///
    /// # Errors
    ///
    /// Returns an error if watching is enabled and the configured signal name
    /// is unknown.
    pub fn from_settings(settings: &WatchSettings) -> Result<Self> {
        if !settings.enabled {
            return Ok(Self::disabled());
        }

        let signal = settings.reload_signal()?;
        Ok(Self::new(SessionManager::with_signal(signal)))
    }
}

impl<W> ReloadHook<W>
where
    W: Watcher + Send + 'static,
{
    /// A hook that watches through `manager`.
    pub fn new(manager: SessionManager<W>) -> Self {
        Self {
            manager: Some(manager),
        }
    }

    /// A hook that does nothing.
    pub fn disabled() -> Self {
        Self { manager: None }
    }

    /// Whether the hook watches anything.
    pub fn is_enabled(&self) -> bool {
        self.manager.is_some()
    }

    /// The underlying manager, if enabled.
    pub fn manager(&self) -> Option<&SessionManager<W>> {
        self.manager.as_ref()
    }

    /// Handle a host lifecycle event.
    ///
    /// # Errors
    ///
    /// Propagates a watcher initialisation failure from the rebuild triggered
    /// by [`HostEvent::ConfigParsed`].
    pub async fn handle(&self, event: &HostEvent) -> Result<()> {
        let Some(manager) = &self.manager else {
            return Ok(());
        };

        match event {
            HostEvent::ConfigParsed(blocks) => {
                debug!(files = ?blocks.files(), "Configuration parsed, rebuilding watch");
                manager.rebuild(blocks).await
            }
            HostEvent::Shutdown => {
                manager.shutdown().await;
                Ok(())
            }
            HostEvent::Startup => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::ReloadNotifier;
    use crate::sources::ServerBlock;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct NoopNotifier;

    impl ReloadNotifier for NoopNotifier {
        fn notify_reload(&self) -> Result<()> {
            Ok(())
        }
    }

    fn enabled_hook() -> ReloadHook {
        ReloadHook::new(SessionManager::new(Arc::new(NoopNotifier)))
    }

    #[test]
    fn test_disabled_by_default() {
        let hook = ReloadHook::from_settings(&WatchSettings::default()).unwrap();
        assert!(!hook.is_enabled());
    }

    #[test]
    fn test_unknown_signal_rejected() {
        let settings = WatchSettings::default()
            .with_enabled(true)
            .with_signal("SIGNOPE");
        assert!(ReloadHook::from_settings(&settings).is_err());
    }

    #[tokio::test]
    async fn test_disabled_hook_ignores_events() {
        let hook: ReloadHook = ReloadHook::disabled();
        let blocks = ServerBlocks::new(vec![ServerBlock::new(["example.com"], "Caddyfile")]);

        hook.handle(&HostEvent::ConfigParsed(blocks)).await.unwrap();
        assert!(hook.manager().is_none());
    }

    #[tokio::test]
    async fn test_config_parsed_rebuilds() {
        let temp_dir = TempDir::new().unwrap();
        let main = temp_dir.path().join("Caddyfile");
        let site = temp_dir.path().join("site.conf");
        fs::write(&main, "import site.conf").unwrap();
        fs::write(&site, "example.com").unwrap();

        let hook = enabled_hook();
        let blocks = ServerBlocks::new(vec![
            ServerBlock::new(["example.com"], &main),
            ServerBlock::new(["api.example.com"], &site),
            ServerBlock::new(["www.example.com"], &main),
        ]);

        hook.handle(&HostEvent::Startup).await.unwrap();
        hook.handle(&HostEvent::ConfigParsed(blocks)).await.unwrap();

        let manager = hook.manager().unwrap();
        assert!(manager.is_active().await);
        assert_eq!(*manager.watched_paths(), vec![main, site]);
    }

    #[tokio::test]
    async fn test_shutdown_stops_watching() {
        let temp_dir = TempDir::new().unwrap();
        let main = temp_dir.path().join("Caddyfile");
        fs::write(&main, "example.com").unwrap();

        let hook = enabled_hook();
        let blocks = ServerBlocks::new(vec![ServerBlock::new(["example.com"], &main)]);

        hook.handle(&HostEvent::ConfigParsed(blocks)).await.unwrap();
        hook.handle(&HostEvent::Shutdown).await.unwrap();

        assert!(!hook.manager().unwrap().is_active().await);
    }
}
