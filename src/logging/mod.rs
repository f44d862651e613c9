//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a log file in
//! the configured directory (default: `~/.local/share/tallycard/logs/`). The
//! file rolls over at midnight UTC and is named `tallycard.<YYYY-MM-DD>.log`.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "tallycard";
const LOG_FILE_SUFFIX: &str = "log";

/// Install the global subscriber. No-op if logging is disabled.
///
/// `RUST_LOG` takes precedence over the configured level. Lines are written
/// by a background worker; the returned guard flushes it when dropped.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = file_appender(&log_dir, config.max_files)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .with(filter)
        .try_init()
        .with_context(|| "Failed to install log subscriber")?;

    Ok(Some(guard))
}

/// Daily rolling appender writing `tallycard.<date>.log` into `dir`.
fn file_appender(dir: &Path, max_files: usize) -> Result<RollingFileAppender> {
    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX);
    if max_files > 0 {
        builder = builder.max_log_files(max_files);
    }
    builder
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))
}

/// Expand a leading `~` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(dir),
        },
        None => PathBuf::from(dir),
    }
}
