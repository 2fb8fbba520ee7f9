//! Reload signals delivered to the test process itself.
//!
//! Every test installs a handler for the signal it expects before anything can
//! send it; the default action would terminate the test binary.

#![cfg(unix)]

use nix::sys::signal::Signal;
use reload_notify::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use tokio::signal::unix::{SignalKind, signal};
use tokio::time::timeout;

#[tokio::test]
async fn test_process_signal_delivers_sigusr1() {
    let mut reloads = signal(SignalKind::user_defined1()).unwrap();

    let notifier = ProcessSignal::default();
    assert_eq!(notifier.signal(), Signal::SIGUSR1);
    notifier.notify_reload().unwrap();

    let received = timeout(Duration::from_secs(2), reloads.recv()).await;
    assert!(matches!(received, Ok(Some(()))));
}

#[tokio::test]
async fn test_file_change_signals_process() {
    let mut reloads = signal(SignalKind::user_defined2()).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("a.conf");
    fs::write(&config, "listen :8080").unwrap();

    let manager = SessionManager::with_signal(ProcessSignal::new(Signal::SIGUSR2));
    manager.rebuild(&[config.clone()]).await.unwrap();

    fs::write(&config, "listen :9090").unwrap();

    let received = timeout(Duration::from_secs(2), reloads.recv()).await;
    assert!(matches!(received, Ok(Some(()))));

    manager.shutdown().await;
}

#[tokio::test]
async fn test_hook_from_settings_uses_configured_signal() {
    let mut reloads = signal(SignalKind::hangup()).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("Caddyfile");
    fs::write(&config, "example.com").unwrap();

    let settings = WatchSettings::default()
        .with_enabled(true)
        .with_signal("SIGHUP");
    let hook = ReloadHook::from_settings(&settings).unwrap();
    assert!(hook.is_enabled());

    let blocks = ServerBlocks::new(vec![ServerBlock::new(["example.com"], &config)]);
    hook.handle(&HostEvent::ConfigParsed(blocks)).await.unwrap();

    fs::write(&config, "example.org").unwrap();

    let received = timeout(Duration::from_secs(2), reloads.recv()).await;
    assert!(matches!(received, Ok(Some(()))));

    hook.handle(&HostEvent::Shutdown).await.unwrap();
}
