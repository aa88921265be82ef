//! Telegram bot instance management

use crate::logger::{self, LogTag};
use crate::telegram::commands::Command;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

/// Create a bot for `token` and validate it with `getMe`
pub async fn connect(token: &str) -> Result<Bot, String> {
    let bot = Bot::new(token);

    match bot.get_me().await {
        Ok(me) => {
            logger::info(
                LogTag::Telegram,
                &format!(
                    "Bot initialized: @{} (ID: {})",
                    me.username.as_deref().unwrap_or("unknown"),
                    me.id
                ),
            );
            Ok(bot)
        }
        Err(e) => {
            logger::error(
                LogTag::Telegram,
                &format!("Failed to validate bot token: {}", e),
            );
            Err(format!("Invalid bot token: {}", e))
        }
    }
}

/// Publish the command menu; a failure here is not fatal
pub async fn register_commands(bot: &Bot) {
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => logger::debug(
            LogTag::Telegram,
            &format!("Registered {} commands", Command::bot_commands().len()),
        ),
        Err(e) => logger::warning(
            LogTag::Telegram,
            &format!("Failed to register command menu: {}", e),
        ),
    }
}
