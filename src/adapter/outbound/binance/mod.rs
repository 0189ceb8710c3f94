//! Binance spot REST adapter.
//!
//! Implements [`MarketDataSource`](crate::port::outbound::exchange::MarketDataSource)
//! on top of the public, unauthenticated `exchangeInfo` and `klines` endpoints.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::BinanceClient;
pub use settings::{BinanceConfig, BinanceHttpConfig};
