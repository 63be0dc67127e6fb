//! Centralized logging configuration for vidcheck
//!
//! This module handles:
//! - Setting up console logging with colored level tags
//! - Managing log levels
//! - Providing utility functions for framing verification stages
//!
//! All library code logs through the `log` facade; the backend configured
//! here is only installed when the CLI (or a consumer) asks for it.

use colored::*;
use log::{LevelFilter, debug, info};
use std::io::Write;

/// Initialize the logger for vidcheck
///
/// Sets up an env_logger with appropriate formatting and log level
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    init_with_level(level);
}

/// Initialize the logger with a specific log level
///
/// Sets up an env_logger with appropriate formatting and the specified log level
pub fn init_with_level(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };

            let level_colored = match record.level() {
                log::Level::Error => level_str.bright_red(),
                log::Level::Warn => level_str.yellow(),
                log::Level::Info => level_str.green(),
                log::Level::Debug => level_str.blue(),
                log::Level::Trace => level_str.magenta(),
            };

            writeln!(
                buf,
                "{} {} {}",
                timestamp.to_string().white(),
                level_colored,
                record.args()
            )
        })
        .filter(None, level)
        .init();

    debug!("Logger initialized with level: {}", level);
}

/// Create a section heading in the logs to separate verification stages
pub fn log_section(title: &str) {
    info!("");
    info!("{}", "=".repeat(50).bright_blue());
    info!("{}", title.bold().bright_white());
    info!("{}", "=".repeat(50).bright_blue());
    info!("");
}

/// Log a subsection heading
pub fn log_subsection(title: &str) {
    info!("");
    info!("{}", "-".repeat(40).blue());
    info!("{}", title.bold().white());
    info!("{}", "-".repeat(40).blue());
}
