//! Forwards `log` records into this logger
//!
//! teloxide reports dispatcher and handler errors through the `log` facade;
//! those records end up under the TELEGRAM tag, everything else under a tag
//! named after the crate that emitted it.

use super::levels::LogLevel;
use super::tags::LogTag;
use log::{LevelFilter, Log, Metadata, Record};

struct LogBridge;

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::Level::Info || metadata.target().starts_with("teloxide")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = tag_for_target(record.target());
        super::core::log_internal(tag, LogLevel::from(record.level()), &record.args().to_string());
    }

    fn flush(&self) {
        super::file::flush_file_logging();
    }
}

fn tag_for_target(target: &str) -> LogTag {
    let root = target.split("::").next().unwrap_or(target);
    match root {
        "teloxide" | "teloxide_core" => LogTag::Telegram,
        "reqwest" | "hyper" => LogTag::Api,
        other => LogTag::Other(other.to_string()),
    }
}

/// Install the bridge as the global `log` logger
pub fn install() {
    if log::set_boxed_logger(Box::new(LogBridge)).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}
