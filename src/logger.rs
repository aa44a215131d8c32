//! Logging setup
//!
//! The library only emits records through the `log` facade. Applications that
//! want to see them call [`init`] once at startup with their
//! [`LoggingConfig`]; records go to stderr and, optionally, to a log file.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use log::Level;
use std::fmt::Arguments;

/// Timestamp layout for log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Format a single log line
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &Arguments<'_>) -> String {
    format!("[{}] {:<5} {}: {}", timestamp, level, target, message)
}

/// Build the dispatcher described by `config`
///
/// Returns `None` when logging is disabled.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Option<fern::Dispatch>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level_filter()?;
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            let timestamp = Local::now().format(LOG_TIMESTAMP_FORMAT).to_string();
            out.finish(format_args!(
                "{}",
                format_line(&timestamp, record.level(), record.target(), message)
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(path) = &config.file {
        let file =
            fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(Some(dispatch))
}

/// Install the global logger described by `config`
///
/// Does nothing when logging is disabled. Fails if a global logger has
/// already been installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if let Some(dispatch) = build_dispatch(config)? {
        dispatch.apply().context("Failed to install logger")?;
        log::debug!("Logging initialized at level {}", config.level);
    }
    Ok(())
}
