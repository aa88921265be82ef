//! Telegram front end
//!
//! - `bot`: token validation and command menu registration
//! - `commands`: command parsing, reply building, dispatcher

pub mod bot;
pub mod commands;

pub use bot::{connect, register_commands};
pub use commands::{build_replies, dispatch, Command, Reply, Sender};
