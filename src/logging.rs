//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the TUI, so log output always goes to a file.
//! `RUST_LOG` overrides the configured level.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Get platform-specific log file path
pub fn default_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("countryviz.log");
    path
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            log_file: default_log_path(),
        }
    }
}

impl LogConfig {
    /// Warnings and errors by default, everything down to debug with `--debug`
    pub fn from_debug_flag(debug: bool) -> Self {
        let level = if debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        };
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    let filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
