//! Append-only file sink for log lines
//!
//! One file per day under `logs/`, opened lazily on first write.

use chrono::Local;
use once_cell::sync::Lazy;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Mutex;

const LOG_DIRECTORY: &str = "logs";

static LOG_FILE: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

fn log_file_path() -> PathBuf {
    let dir = std::env::var("LOG_DIR").unwrap_or_else(|_| LOG_DIRECTORY.to_string());
    PathBuf::from(dir).join(format!(
        "{}_{}.log",
        env!("CARGO_PKG_NAME"),
        Local::now().format("%Y-%m-%d")
    ))
}

/// Open the log file; failures leave the logger console-only
pub fn init_file_logging() {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("⚠️  Failed to create log directory {:?}: {}", parent, e);
            return;
        }
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            if let Ok(mut guard) = LOG_FILE.lock() {
                *guard = Some(BufWriter::new(file));
            }
        }
        Err(e) => eprintln!("⚠️  Failed to open log file {:?}: {}", path, e),
    }
}

pub fn write_to_file(line: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(writer) = guard.as_mut() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

pub fn flush_file_logging() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(writer) = guard.as_mut() {
            let _ = writer.flush();
        }
    }
}
