use raydium_pools_bot::{
    arguments::{get_debug_tags, is_help_requested, print_help},
    logger::{self as logger, LogTag},
    run::run_bot,
};

/// Entry point: logger, `--help`, then the bot until Ctrl-C
#[tokio::main]
async fn main() {
    logger::init();

    if is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    let debug_tags = get_debug_tags();
    if !debug_tags.is_empty() {
        logger::info(
            LogTag::System,
            &format!("Debug logging enabled for: {}", debug_tags.join(", ")),
        );
    }

    match run_bot().await {
        Ok(()) => {
            logger::info(LogTag::System, "Raydium pools bot stopped");
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("Bot failed: {}", e));
            logger::flush();
            std::process::exit(1);
        }
    }
}
