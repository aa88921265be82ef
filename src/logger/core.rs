/// Core logging implementation with automatic filtering
use super::config::{
    get_logger_config, is_debug_enabled_for_tag, is_verbose_enabled_for_tag, LoggerConfig,
};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Debug requires --debug-<tag> (or --verbose)
/// 3. Verbose requires --verbose or --verbose-<tag>
/// 4. Other levels are compared against the minimum threshold
pub fn should_log_with(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    match level {
        LogLevel::Debug => is_debug_enabled_for_tag(config, tag),
        LogLevel::Verbose => {
            config.min_level == LogLevel::Verbose || is_verbose_enabled_for_tag(config, tag)
        }
        _ => level <= config.min_level,
    }
}

pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    should_log_with(&get_logger_config(), tag, level)
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level, message);
}
