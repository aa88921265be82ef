//! /start: greeting only, never touches the pools API

use super::{Reply, Sender};
use crate::formatters::html_escape;

pub const WELCOME_TEXT: &str =
    "Welcome! Use /all_pools, /concentrated_pools, or /standard_pools to get information.";

/// HTML mention linking to the sender's profile
pub fn mention_html(sender: &Sender) -> String {
    format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        sender.id,
        html_escape(&sender.full_name)
    )
}

/// `Hi <mention>!` followed by the command overview
pub fn greeting(sender: Option<&Sender>) -> Vec<Reply> {
    let hello = match sender {
        Some(sender) => format!("Hi {}!", mention_html(sender)),
        None => "Hi!".to_string(),
    };

    vec![Reply::Html(hello), Reply::Text(WELCOME_TEXT.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::UserId;

    #[test]
    fn mention_escapes_display_name() {
        let sender = Sender {
            id: UserId(42),
            full_name: "Ann <LP> & Co".to_string(),
        };
        assert_eq!(
            mention_html(&sender),
            "<a href=\"tg://user?id=42\">Ann &lt;LP&gt; &amp; Co</a>"
        );
    }

    #[test]
    fn greeting_without_sender_still_welcomes() {
        let replies = greeting(None);
        assert_eq!(
            replies,
            vec![
                Reply::Html("Hi!".to_string()),
                Reply::Text(WELCOME_TEXT.to_string())
            ]
        );
    }
}
