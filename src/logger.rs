//! Log output setup.
//!
//! Library code only emits `log` records; the binary calls [`init`] once to
//! route them to stderr and, when enabled in the configuration, to a log
//! file in the user's data directory.

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;

/// Map `-v` occurrences to a level, falling back to `configured` when none
/// were given.
///
/// - 0 -> configured level
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
pub fn level_for(verbosity: u8, configured: LevelFilter) -> LevelFilter {
    match verbosity {
        0 => configured,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Get the log file path
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("timeline-slider").join("timeline-slider.log"))
}

/// Build the dispatcher without installing it
pub fn dispatch(config: &LoggingConfig, verbosity: u8) -> Result<fern::Dispatch> {
    let level = level_for(verbosity, config.level_filter()?);

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger
pub fn init(config: &LoggingConfig, verbosity: u8) -> Result<()> {
    dispatch(config, verbosity)?
        .apply()
        .context("Failed to install logger")?;
    Ok(())
}
