//! Bot commands and their dispatch
//!
//! Parsing is derived by teloxide; the reply content is built by
//! [`build_replies`] so it can be exercised without a live bot.

mod pools;
mod start;

pub use pools::pool_table_reply;
pub use start::{greeting, mention_html, WELCOME_TEXT};

use crate::errors::PoolsError;
use crate::logger::{self, LogTag};
use crate::pools::{PoolSource, PoolTypeFilter};
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode, User, UserId};
use teloxide::utils::command::BotCommands;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case", description = "Raydium pool statistics:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "top pools across every pool type")]
    AllPools,
    #[command(description = "top concentrated liquidity pools")]
    ConcentratedPools,
    #[command(description = "top standard AMM pools")]
    StandardPools,
}

impl Command {
    /// Filter for data commands, `None` for `/start`
    pub fn pool_type(&self) -> Option<PoolTypeFilter> {
        match self {
            Command::Start => None,
            Command::AllPools => Some(PoolTypeFilter::All),
            Command::ConcentratedPools => Some(PoolTypeFilter::Concentrated),
            Command::StandardPools => Some(PoolTypeFilter::Standard),
        }
    }
}

/// A single outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Html(String),
    Text(String),
}

/// The parts of the message author a reply needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: UserId,
    pub full_name: String,
}

impl Sender {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name(),
        }
    }
}

/// Replies for `cmd`, in send order. Only data commands reach `source`.
pub async fn build_replies(
    cmd: &Command,
    sender: Option<&Sender>,
    source: &dyn PoolSource,
) -> Result<Vec<Reply>, PoolsError> {
    match cmd.pool_type() {
        None => Ok(greeting(sender)),
        Some(pool_type) => Ok(vec![pool_table_reply(source, pool_type).await?]),
    }
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> HandlerResult {
    match reply {
        Reply::Html(text) => {
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Reply::Text(text) => {
            bot.send_message(chat_id, text).await?;
        }
    }
    Ok(())
}

/// Endpoint for every parsed [`Command`]
///
/// Fetch failures are returned to the dispatcher, which logs them; the user
/// gets no reply in that case.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    source: Arc<dyn PoolSource>,
) -> HandlerResult {
    logger::info(
        LogTag::Telegram,
        &format!("Command {:?} from chat {}", cmd, msg.chat.id),
    );

    let sender = msg.from.as_ref().map(Sender::from_user);
    let replies = build_replies(&cmd, sender.as_ref(), source.as_ref()).await?;

    for reply in replies {
        send_reply(&bot, msg.chat.id, reply).await?;
    }

    Ok(())
}

/// Message handler tree: commands only, anything else falls through
pub fn schema() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handle_command)
}

/// Poll for updates until Ctrl-C
pub async fn dispatch(bot: Bot, source: Arc<dyn PoolSource>) {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![source])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::{PoolRow, PoolRowBatch};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every requested filter
    #[derive(Default)]
    struct CountingSource {
        calls: Mutex<Vec<PoolTypeFilter>>,
        fail: bool,
    }

    impl CountingSource {
        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn calls(&self) -> Vec<PoolTypeFilter> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PoolSource for CountingSource {
        async fn fetch(&self, pool_type: PoolTypeFilter) -> Result<PoolRowBatch, PoolsError> {
            self.calls.lock().unwrap().push(pool_type);
            if self.fail {
                return Err(PoolsError::HttpStatus { status: 502 });
            }
            Ok(PoolRowBatch::new(vec![PoolRow {
                token_pair: "SOL - USDC".to_string(),
                liquidity: "$1,000,000.00".to_string(),
                volume: "$50,000.00".to_string(),
                fee: "$0.01".to_string(),
                apr: "$0.25".to_string(),
            }]))
        }
    }

    #[test]
    fn parses_each_command() {
        let cases = [
            ("/start", Command::Start),
            ("/all_pools", Command::AllPools),
            ("/concentrated_pools", Command::ConcentratedPools),
            ("/standard_pools@raydium_pools_bot", Command::StandardPools),
        ];
        for (text, expected) in cases {
            assert_eq!(Command::parse(text, "raydium_pools_bot").unwrap(), expected);
        }
        assert!(Command::parse("/top_pools", "raydium_pools_bot").is_err());
    }

    #[test]
    fn data_commands_map_to_filters() {
        assert_eq!(Command::Start.pool_type(), None);
        assert_eq!(Command::AllPools.pool_type(), Some(PoolTypeFilter::All));
        assert_eq!(
            Command::ConcentratedPools.pool_type(),
            Some(PoolTypeFilter::Concentrated)
        );
        assert_eq!(
            Command::StandardPools.pool_type(),
            Some(PoolTypeFilter::Standard)
        );
    }

    #[test]
    fn command_menu_lists_all_commands() {
        let names: Vec<String> = Command::bot_commands()
            .into_iter()
            .map(|c| c.command.trim_start_matches('/').to_string())
            .collect();
        assert_eq!(
            names,
            vec!["start", "all_pools", "concentrated_pools", "standard_pools"]
        );
    }

    #[tokio::test]
    async fn start_does_not_fetch() {
        let source = CountingSource::default();
        let sender = Sender {
            id: UserId(7),
            full_name: "Alice".to_string(),
        };

        let replies = build_replies(&Command::Start, Some(&sender), &source)
            .await
            .unwrap();

        assert!(source.calls().is_empty());
        assert_eq!(
            replies,
            vec![
                Reply::Html("Hi <a href=\"tg://user?id=7\">Alice</a>!".to_string()),
                Reply::Text(WELCOME_TEXT.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn data_commands_fetch_once_with_their_filter() {
        for cmd in [
            Command::AllPools,
            Command::ConcentratedPools,
            Command::StandardPools,
        ] {
            let source = CountingSource::default();
            let replies = build_replies(&cmd, None, &source).await.unwrap();

            assert_eq!(source.calls(), vec![cmd.pool_type().unwrap()]);
            assert_eq!(replies.len(), 1);
            match &replies[0] {
                Reply::Html(body) => {
                    assert!(body.starts_with("<pre>"));
                    assert!(body.ends_with("</pre>"));
                    assert!(body.contains("SOL - USDC"));
                    assert!(body.contains("$1,000,000.00"));
                }
                other => panic!("expected HTML reply, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn fetch_errors_propagate() {
        let source = CountingSource::failing();
        let err = build_replies(&Command::AllPools, None, &source)
            .await
            .unwrap_err();

        assert!(matches!(err, PoolsError::HttpStatus { status: 502 }));
        assert_eq!(source.calls(), vec![PoolTypeFilter::All]);
    }
}
