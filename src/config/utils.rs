/// Configuration utilities - loading and validation
///
/// The loaded [`Config`] is returned by value and handed to the components
/// that need it; nothing here is stored globally.
use super::schemas::Config;
use crate::errors::ConfigError;
use crate::logger::{self, LogTag};
use std::path::Path;

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Environment variable holding the bot token
pub const TOKEN_ENV_VAR: &str = "TELEGRAM_TOKEN";

/// Load configuration from a TOML file
///
/// A missing file is not an error: defaults from the schema definitions are
/// used instead. A present but malformed file is.
pub fn load_config_from_path(path: &str) -> Result<Config, ConfigError> {
    let config = if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let config = toml::from_str::<Config>(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        logger::debug(LogTag::Config, &format!("Loaded configuration from {}", path));
        config
    } else {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        Config::default()
    };

    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.raydium.pools_url.trim().is_empty() {
        return Err(ConfigError::Invalid("raydium.pools_url is empty".to_string()));
    }
    if config.raydium.page_size == 0 {
        return Err(ConfigError::Invalid("raydium.page_size must be greater than zero".to_string()));
    }
    if config.raydium.page == 0 {
        return Err(ConfigError::Invalid("raydium.page starts at 1".to_string()));
    }
    Ok(())
}

/// Load `.env` into the process environment if present
pub fn load_env_file() {
    match dotenv::dotenv() {
        Ok(path) => logger::debug(LogTag::Config, &format!("Loaded environment from {:?}", path)),
        Err(_) => logger::debug(LogTag::Config, "No .env file found"),
    }
}

/// Read the bot token from `TELEGRAM_TOKEN`
pub fn read_bot_token() -> Result<String, ConfigError> {
    parse_bot_token(std::env::var(TOKEN_ENV_VAR).ok())
}

fn parse_bot_token(value: Option<String>) -> Result<String, ConfigError> {
    value
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(ConfigError::MissingToken(TOKEN_ENV_VAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config_from_path("does/not/exist.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.raydium.page_size, 10);
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[raydium]\npage_size = 5\n\n[display]\ncurrency_symbol = \"€\"").unwrap();

        let config = load_config_from_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.raydium.page_size, 5);
        assert_eq!(config.raydium.sort_type, "desc");
        assert_eq!(config.display.currency_symbol, "€");
        assert_eq!(config.display.decimals, 2);
    }

    #[test]
    fn malformed_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[raydium\npage_size = ").unwrap();

        let err = load_config_from_path(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let mut config = Config::default();
        config.raydium.page_size = 0;
        assert!(matches!(validate_config(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn token_must_be_present_and_non_blank() {
        assert_eq!(parse_bot_token(Some(" 123:abc \n".to_string())).unwrap(), "123:abc");
        assert!(matches!(parse_bot_token(Some("   ".to_string())), Err(ConfigError::MissingToken(_))));
        assert!(matches!(parse_bot_token(None), Err(ConfigError::MissingToken(_))));
    }
}
