//! Exchange port for symbol metadata and short-interval price changes.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{interval::Interval, symbol::Symbol};
use crate::error::Result;

/// Source of market data used by the gainers ranker.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// List actively traded symbols quoted in an allowed asset.
    ///
    /// Fetched once per ranking request.
    async fn eligible_symbols(&self) -> Result<Vec<Symbol>>;

    /// Percentage change between the last two closes at `interval`.
    ///
    /// Every failure (transport, rate limit, malformed payload, fewer than
    /// two closes, zero previous close) is reported as `None`.
    async fn percent_change(&self, symbol: &Symbol, interval: Interval) -> Option<Decimal>;

    /// Exchange name for logging.
    fn exchange_name(&self) -> &'static str;
}
