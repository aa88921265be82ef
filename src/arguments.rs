/// Centralized command-line argument handling
///
/// Arguments are read once into `CMD_ARGS` so the logger, the config loader
/// and `main` all see the same list.
use once_cell::sync::Lazy;
use std::env;

use crate::config::CONFIG_FILE_PATH;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Vec<String>> = Lazy::new(|| env::args().collect());

/// Gets a copy of the process command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    CMD_ARGS.to_vec()
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
pub fn get_arg_value(flag: &str) -> Option<String> {
    value_after(&get_cmd_args(), flag)
}

fn value_after(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .filter(|value| !value.starts_with("--"))
        .cloned()
}

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Path of the TOML configuration file (`--config <path>`)
pub fn get_config_path() -> String {
    get_arg_value("--config").unwrap_or_else(|| CONFIG_FILE_PATH.to_string())
}

/// Tags enabled through `--debug-<tag>` flags
pub fn get_debug_tags() -> Vec<String> {
    get_cmd_args()
        .iter()
        .filter_map(|a| a.strip_prefix("--debug-").map(str::to_string))
        .collect()
}

pub fn print_help() {
    println!("Raydium Pools Bot - Telegram bot reporting top Raydium liquidity pools");
    println!();
    println!("USAGE:");
    println!("    raydium-pools-bot [FLAGS]");
    println!();
    println!("ENVIRONMENT:");
    println!("    TELEGRAM_TOKEN            Bot token from @BotFather (required, .env supported)");
    println!();
    println!("FLAGS:");
    println!("    --config <path>           Configuration file (default: {})", CONFIG_FILE_PATH);
    println!("    --help, -h                Show this help message");
    println!("    --verbose                 Show debug and verbose output for every module");
    println!("    --verbose-<tag>           Show verbose output for one module (e.g. --verbose-api)");
    println!("    --quiet                   Only show warnings and errors");
    println!("    --no-log-file             Disable the daily log file");
    println!();
    println!("DEBUG FLAGS:");
    println!("    --debug-api               Raydium API requests");
    println!("    --debug-config            Configuration loading");
    println!("    --debug-pools             Pool projection and table rendering");
    println!("    --debug-system            Startup and shutdown");
    println!("    --debug-telegram          Bot commands and replies");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn value_after_returns_following_argument() {
        let list = args(&["bot", "--config", "custom.toml", "--verbose"]);
        assert_eq!(value_after(&list, "--config"), Some("custom.toml".to_string()));
    }

    #[test]
    fn value_after_ignores_missing_or_flag_values() {
        assert_eq!(value_after(&args(&["bot", "--config"]), "--config"), None);
        assert_eq!(value_after(&args(&["bot", "--config", "--quiet"]), "--config"), None);
        assert_eq!(value_after(&args(&["bot"]), "--config"), None);
    }
}
