// ============================================================================
// mediaprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialization for the CLI
//
// The application uses the standard `log` crate with `env_logger` as the
// backend, honoring the RUST_LOG environment variable:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug: Detailed debugging information, including every
//   rejection reason for unprobeable files
// - RUST_LOG=trace: Very verbose debugging information
//
// AI-ASSISTANT-INFO: Logging initialization for the mediaprobe CLI

use colored::Colorize;
use log::LevelFilter;
use std::io::Write;

/// Initialize the logger for mediaprobe
///
/// Sets up an env_logger with appropriate formatting and log level.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    init_with_level(level);
}

/// Initialize the logger with a specific default log level
///
/// RUST_LOG, when set, takes precedence over the supplied level.
pub fn init_with_level(level: LevelFilter) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.to_string()),
    )
    .format(|buf, record| {
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

        writeln!(buf, "{} {}", level_colored, record.args())
    })
    .init();

    log::debug!("Logger initialized with level: {}", level);
}
