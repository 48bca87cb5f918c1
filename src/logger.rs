//! File-based tracing setup.
//!
//! Logs go to `namewheel.log` in the state directory so the dashboard's
//! alternate screen is never written over. Filter with `NAMEWHEEL_LOG`
//! (same syntax as `RUST_LOG`), default `info`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "NAMEWHEEL_LOG";
const LOG_FILE_NAME: &str = "namewheel.log";

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(state_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(state_dir).context("Failed to create log directory")?;
    let appender = tracing_appender::rolling::never(state_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_timer(UtcTime::rfc_3339()),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
