//! Configuration: TOML file sections plus the bot token from the environment

mod macros;
mod schemas;
mod utils;

pub use schemas::{Config, DisplayConfig, RaydiumConfig, DEFAULT_POOLS_URL};
pub use utils::{
    load_config_from_path, load_env_file, read_bot_token, validate_config, CONFIG_FILE_PATH,
    TOKEN_ENV_VAR,
};
