//! Telegram bot surface.
//!
//! Commands show a greeting or the interval menu; inline button taps run the
//! [`flow::IntervalFlow`], which ranks gainers and edits a loading message
//! in place with the result.

pub mod command;
pub mod flow;
pub mod format;
pub mod route;
pub mod settings;

#[cfg(feature = "telegram")]
pub mod bot;

pub use flow::{FlowOutcome, IntervalFlow, IntervalRequest};
pub use settings::TelegramConfig;
