use crate::{
    apis::RaydiumClient,
    arguments,
    config::{self, Config},
    formatters::CurrencyFormatter,
    logger::{self, LogTag},
    pools::{PoolFetcher, PoolSource},
    telegram,
};
use std::sync::Arc;

/// Build the pool source from a loaded config
pub fn build_pool_source(config: &Config) -> Result<Arc<dyn PoolSource>, String> {
    let formatter = CurrencyFormatter::from_config(&config.display)
        .map_err(|e| format!("Invalid display config: {}", e))?;
    let client = RaydiumClient::new(config.raydium.clone())
        .map_err(|e| format!("Failed to create Raydium client: {}", e))?;

    Ok(Arc::new(PoolFetcher::new(client, formatter)))
}

/// Main bot execution function - handles the full bot lifecycle
///
/// Returns once the dispatcher stops (Ctrl-C). Any startup failure is
/// returned as an error for `main` to report.
pub async fn run_bot() -> Result<(), String> {
    logger::info(LogTag::System, "Raydium pools bot starting up...");

    // 1. Environment and config file
    config::load_env_file();
    let config_path = arguments::get_config_path();
    let config = config::load_config_from_path(&config_path).map_err(|e| e.to_string())?;
    logger::info(
        LogTag::Config,
        &format!(
            "Config loaded from {} (page size {}, locale {})",
            config_path, config.raydium.page_size, config.display.locale
        ),
    );

    let token = config::read_bot_token().map_err(|e| e.to_string())?;

    // 2. Pool pipeline
    let source = build_pool_source(&config)?;

    // 3. Telegram
    let bot = telegram::connect(&token).await?;
    telegram::register_commands(&bot).await;

    logger::info(LogTag::Telegram, "Listening for commands (Ctrl-C to stop)");
    telegram::dispatch(bot, source).await;

    logger::info(LogTag::System, "Dispatcher stopped, shutting down");
    logger::flush();
    Ok(())
}
