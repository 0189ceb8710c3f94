//! Inbound adapters (driving side): Telegram bot, liveness HTTP and CLI.

pub mod cli;
pub mod liveness;
pub mod telegram;
