//! Diagnostics via `tracing`.
//!
//! The terminal is owned by the game view, so events are written to a file
//! (`SNAKE_LOG_PATH`) and never to stdout or stderr. Without a log path no
//! subscriber is installed and every event is a no-op.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the file subscriber. Reads `RUST_LOG`, defaulting to `info`.
pub fn init(log_path: Option<&str>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact(),
        )
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}
