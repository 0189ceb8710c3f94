//! Gainer entries, percentage change and ranking.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::symbol::Symbol;

/// Default number of entries shown to the user.
pub const DEFAULT_TOP_N: usize = 10;

/// One symbol's percentage change over the selected interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GainerEntry {
    pub symbol: Symbol,
    /// Percentage change, e.g. `10` for +10%.
    pub change: Decimal,
}

impl GainerEntry {
    pub fn new(symbol: impl Into<Symbol>, change: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            change,
        }
    }
}

/// Percentage change from `previous` to `current`.
///
/// Returns `None` when `previous` is zero.
#[must_use]
pub fn percent_change(previous: Decimal, current: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    (current - previous)
        .checked_div(previous)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Sort entries by change descending and keep the first `limit`.
///
/// Equal changes are ordered by symbol ascending.
#[must_use]
pub fn rank_gainers(mut entries: Vec<GainerEntry>, limit: usize) -> Vec<GainerEntry> {
    entries.sort_by(compare_gainers);
    entries.truncate(limit);
    entries
}

fn compare_gainers(a: &GainerEntry, b: &GainerEntry) -> Ordering {
    b.change
        .cmp(&a.change)
        .then_with(|| a.symbol.cmp(&b.symbol))
}
