//! Tradable symbols and eligibility rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbol identifier for a tradable pair such as `BTCUSDT`.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new `Symbol` from a string.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the symbol is quoted in one of `quote_assets`.
    #[must_use]
    pub fn is_quoted_in<S: AsRef<str>>(&self, quote_assets: &[S]) -> bool {
        quote_assets
            .iter()
            .any(|quote| !quote.as_ref().is_empty() && self.0.ends_with(quote.as_ref()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Trading status reported by the exchange for a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradingStatus {
    /// Actively trading.
    Trading,
    /// Any other status (halted, break, delisted, ...).
    Other(String),
}

impl TradingStatus {
    /// Parse the raw exchange status string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "TRADING" {
            Self::Trading
        } else {
            Self::Other(raw.to_string())
        }
    }

    #[must_use]
    pub const fn is_trading(&self) -> bool {
        matches!(self, Self::Trading)
    }
}

/// A symbol as listed in exchange metadata, before eligibility filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolListing {
    pub symbol: Symbol,
    pub status: TradingStatus,
}

impl SymbolListing {
    pub fn new(symbol: impl Into<Symbol>, status: TradingStatus) -> Self {
        Self {
            symbol: symbol.into(),
            status,
        }
    }

    /// Eligible listings are actively trading and quoted in an allowed asset.
    #[must_use]
    pub fn is_eligible<S: AsRef<str>>(&self, quote_assets: &[S]) -> bool {
        self.status.is_trading() && self.symbol.is_quoted_in(quote_assets)
    }
}

/// Keep only eligible listings, preserving exchange order.
pub fn filter_eligible<S: AsRef<str>>(
    listings: impl IntoIterator<Item = SymbolListing>,
    quote_assets: &[S],
) -> Vec<Symbol> {
    listings
        .into_iter()
        .filter(|listing| listing.is_eligible(quote_assets))
        .map(|listing| listing.symbol)
        .collect()
}
