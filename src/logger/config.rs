/// Logger configuration and command-line flag parsing
///
/// Flags understood:
/// - `--verbose`           show Debug and Verbose messages for every tag
/// - `--quiet`             raise the threshold to Warning
/// - `--debug-<tag>`       enable Debug messages for one tag
/// - `--verbose-<tag>`     enable Verbose messages for one tag
/// - `--no-log-file`       console only
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub debug_tags: HashSet<String>,
    pub verbose_tags: HashSet<String>,
    pub file_logging: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            file_logging: true,
        }
    }
}

impl LoggerConfig {
    /// Build a configuration from raw command-line arguments
    pub fn from_args(args: &[String]) -> Self {
        let mut config = Self::default();

        for arg in args {
            if arg == "--verbose" {
                config.min_level = LogLevel::Verbose;
            } else if arg == "--quiet" {
                config.min_level = LogLevel::Warning;
            } else if arg == "--no-log-file" {
                config.file_logging = false;
            } else if let Some(tag) = arg.strip_prefix("--debug-") {
                config.debug_tags.insert(tag.to_lowercase());
            } else if let Some(tag) = arg.strip_prefix("--verbose-") {
                config.verbose_tags.insert(tag.to_lowercase());
            }
        }

        config
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Initialize the global logger configuration from the process arguments
pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(&crate::arguments::get_cmd_args()));
}

pub fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.min_level == LogLevel::Verbose || config.debug_tags.contains(&tag.to_debug_key())
}

pub fn is_verbose_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.verbose_tags.contains(&tag.to_debug_key())
}
