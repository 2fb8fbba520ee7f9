//! Minimal host process.
//!
//! Treats each file given on the command line as one configuration block,
//! watches them when `--notify` is set, and "reloads" (re-reads the file list
//! and rebuilds the watch) whenever the reload signal arrives.

#[cfg(unix)]
use clap::Parser;
#[cfg(unix)]
use std::path::PathBuf;

#[cfg(unix)]
#[derive(Debug, Parser)]
#[command(
    name = "reload-notify",
    version,
    about = "Signal this process to reload when its config files change"
)]
struct Cli {
    /// Notify this process of config file changes to prompt a reload
    #[arg(long)]
    notify: bool,

    /// Settings file (yaml, toml or json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Signal sent on change, e.g. SIGUSR1 or SIGHUP
    #[arg(long, value_name = "NAME")]
    signal: Option<String>,

    /// Configuration files
    files: Vec<PathBuf>,
}

#[cfg(unix)]
fn parse_blocks(files: &[PathBuf]) -> reload_notify::sources::ServerBlocks {
    use reload_notify::sources::{ServerBlock, ServerBlocks};

    ServerBlocks::new(
        files
            .iter()
            .map(|file| ServerBlock::new([file.display().to_string()], file))
            .collect(),
    )
}

#[cfg(unix)]
#[tokio::main]
async fn main() -> reload_notify::error::Result<()> {
    use reload_notify::prelude::*;
    use reload_notify::settings::DEFAULT_ENV_PREFIX;
    use tokio::signal::unix::{SignalKind, signal};
    use tracing::{error, info};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = WatchSettings::load(cli.config.as_deref(), DEFAULT_ENV_PREFIX)?;
    if cli.notify {
        settings = settings.with_enabled(true);
    }
    if let Some(name) = cli.signal {
        settings = settings.with_signal(name);
    }

    let hook = ReloadHook::from_settings(&settings)?;
    info!(
        enabled = hook.is_enabled(),
        signal = %settings.signal,
        files = cli.files.len(),
        "Starting"
    );

    if !hook.is_enabled() {
        // Nothing is watched, so the reload signal keeps its default disposition
        tokio::signal::ctrl_c().await?;
        info!("Shutting down");
        return Ok(());
    }

    // Listen before the first session exists so the signal never hits the default handler
    let reload_signal = settings.reload_signal()?;
    let mut reloads = signal(SignalKind::from_raw(reload_signal.signal() as i32))?;

    hook.handle(&HostEvent::Startup).await?;
    hook.handle(&HostEvent::ConfigParsed(parse_blocks(&cli.files))).await?;

    loop {
        tokio::select! {
            _ = reloads.recv() => {
                info!("Reload requested, re-reading configuration");
                let parsed = HostEvent::ConfigParsed(parse_blocks(&cli.files));
                if let Err(e) = hook.handle(&parsed).await {
                    error!(error = %e, "Failed to rebuild file watch");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    hook.handle(&HostEvent::Shutdown).await
}

#[cfg(not(unix))]
fn main() {
    eprintln!("reload-notify: file watching is not supported on this platform");
    std::process::exit(1);
}
