//! Gainerbot - top Binance gainers over short intervals, served on Telegram.
//!
//! The crate is laid out as ports and adapters:
//!
//! - [`domain`] - Symbols, intervals, gainer entries and the ranking rule
//! - [`port`] - Traits for the exchange data source and the chat surface
//! - [`application`] - The gainers ranker and request metrics
//! - [`adapter`] - Binance REST client, Telegram dispatcher, liveness HTTP, CLI
//! - [`infrastructure`] - Configuration, logging and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` - Enable the Telegram bot (on by default)
//!
//! # Example
//!
//! ```no_run
//! use gainerbot::domain::interval::Interval;
//! use gainerbot::domain::gainer::{rank_gainers, GainerEntry};
//!
//! let interval = Interval::from_callback_data("int_5m");
//! assert_eq!(interval, Some(Interval::FiveMinutes));
//! let ranked = rank_gainers(Vec::<GainerEntry>::new(), 10);
//! assert!(ranked.is_empty());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
