//! Log formatting and output with ANSI colors and text wrapping
//!
//! Handles:
//! - Colorized console output with tag and level formatting
//! - Text wrapping at word boundaries
//! - Dual output (console + file)
//! - Broken pipe handling for piped commands

use super::file::write_to_file;
use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 9;
const LEVEL_WIDTH: usize = 7;
const BRACKET_SPACE_WIDTH: usize = 3;
const TOTAL_PREFIX_WIDTH: usize = TAG_WIDTH + LEVEL_WIDTH + BRACKET_SPACE_WIDTH * 2;

/// Maximum line length before wrapping
const MAX_LINE_LENGTH: usize = 145;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let now = Local::now();
    let prefix = format!("{} ", now.format("%H:%M:%S")).dimmed().to_string();

    let base_line = format!("{}[{}] [{}] ", prefix, format_tag(&tag), format_level(level));

    let available_space = MAX_LINE_LENGTH
        .checked_sub(strip_ansi_codes(&base_line).len())
        .filter(|space| *space > 0)
        .unwrap_or(50);

    let message_chunks = wrap_text(message, available_space);

    let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let tag_clean = tag.to_plain_string();

    print_stdout_safe(&format!("{}{}", base_line, message_chunks[0]));
    write_to_file(&format!(
        "{} [{}] [{}] {}",
        timestamp, tag_clean, level, message_chunks[0]
    ));

    if message_chunks.len() > 1 {
        let continuation_prefix = " ".repeat(strip_ansi_codes(&prefix).len() + TOTAL_PREFIX_WIDTH);
        for chunk in &message_chunks[1..] {
            print_stdout_safe(&format!("{}{}", continuation_prefix, chunk));
            write_to_file(&format!("{} [{}] [{}] {}", timestamp, tag_clean, level, chunk));
        }
    }
}

/// Format a tag with appropriate color
fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Config => label.bright_white().bold(),
        LogTag::Api => label.bright_purple().bold(),
        LogTag::Pools => label.bright_blue().bold(),
        LogTag::Telegram => label.bright_cyan().bold(),
        LogTag::Other(_) => label.white().bold(),
    }
}

/// Format log level with appropriate color
fn format_level(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => label.bright_red().bold(),
        LogLevel::Warning => label.bright_yellow().bold(),
        LogLevel::Info => label.white().bold(),
        LogLevel::Debug | LogLevel::Verbose => label.dimmed(),
    }
}

/// Print to stdout but ignore broken pipe errors
fn print_stdout_safe(message: &str) {
    if let Err(e) = writeln!(stdout(), "{}", message) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        let _ = writeln!(std::io::stderr(), "Logger stdout error: {}", e);
    }
    if let Err(e) = stdout().flush() {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}

/// Remove ANSI color codes from text
fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for ch in text.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape && ch == 'm' {
            in_escape = false;
        } else if !in_escape {
            result.push(ch);
        }
    }
    result
}

/// Wrap text at word boundaries, respecting existing newlines
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for line in text.split('\n') {
        if line.chars().count() <= max_width {
            result.push(line.to_string());
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            let word_length = word.chars().count();
            let current_length = current_line.chars().count();

            if word_length > max_width {
                if !current_line.is_empty() {
                    result.push(std::mem::take(&mut current_line));
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(max_width) {
                    result.push(chunk.iter().collect());
                }
            } else if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_length + word_length + 1 <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push(std::mem::replace(&mut current_line, word.to_string()));
            }
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}
