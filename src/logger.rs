//! Logging setup on top of the `log` facade.
//!
//! With logging enabled every record at or above the configured level goes to
//! the log file. Otherwise only warnings and errors are reported, on stderr.

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};

/// Resolve where log records are written when file logging is enabled.
pub fn get_log_file_path(config: &LoggingConfig) -> Result<PathBuf> {
    if let Some(file) = &config.file {
        return Ok(file.clone());
    }
    dirs::data_local_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory for the log file"))
}

/// Build the dispatch described by `config` without installing it.
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let base = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        // database drivers are chatty at debug
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn);

    if !config.enabled {
        return Ok(base.level(LevelFilter::Warn).chain(std::io::stderr()));
    }

    let path = get_log_file_path(config)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(base.level(config.level_filter()).chain(file))
}

/// Install the global logger. Can only succeed once per process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    build_dispatch(config)?
        .apply()
        .context("A global logger is already installed")?;
    Ok(())
}
