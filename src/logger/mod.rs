//! Structured logging for the pools bot
//!
//! This module provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-subsystem debug control via --debug-<tag> flags
//! - Dual output: colored console + daily log file
//! - A `log` facade bridge so teloxide's own messages share the same sink
//!
//! ## Usage
//!
//! ```rust,ignore
//! use raydium_pools_bot::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "Connection failed");
//! logger::info(LogTag::Telegram, "Bot connected");
//! logger::debug(LogTag::Pools, "Projected 10 rows"); // Only with --debug-pools
//! ```
//!
//! Call [`init`] once at startup, before any logging occurs.

mod bridge;
mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// 1. Parse command-line arguments for debug flags
/// 2. Open the log file (unless --no-log-file)
/// 3. Route `log` records (teloxide, reqwest) through this logger
pub fn init() {
    config::init_from_args();

    if get_logger_config().file_logging {
        file::init_file_logging();
    }

    bridge::install();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, shown only with --debug-<tag>
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, shown only with --verbose or --verbose-<tag>
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Force flush pending file writes. Call during shutdown.
pub fn flush() {
    file::flush_file_logging();
}
