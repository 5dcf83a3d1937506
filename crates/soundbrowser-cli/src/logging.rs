//! Subscriber setup. `RUST_LOG` wins over `--log-level` when set.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

pub const LOG_FILE: &str = "soundbrowser.log";

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Log to stderr, keeping stdout for command output.
pub fn init_stderr(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to `<data_dir>/soundbrowser.log`, for when the TUI owns the terminal.
pub fn init_file(level: LogLevel, data_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir).with_context(|| {
        format!("failed to create data directory '{}'", data_dir.display())
    })?;

    let log_path = data_dir.join(LOG_FILE);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .try_init();

    Ok(log_path)
}
