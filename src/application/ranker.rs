//! Top gainers ranking.
//!
//! Fans out one price-change lookup per eligible symbol, keeps the symbols
//! that produced a value, and ranks them. Individual lookups never abort the
//! batch: the data source reports failures as absent values.

use std::sync::Arc;
use std::time::Instant;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::domain::gainer::{rank_gainers, GainerEntry, DEFAULT_TOP_N};
use crate::domain::interval::Interval;
use crate::port::outbound::exchange::MarketDataSource;

/// Default number of price-change lookups in flight at once.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 64;

/// Ranker tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct RankerSettings {
    /// Maximum concurrent per-symbol lookups.
    pub max_in_flight: usize,
    /// Number of entries returned, at most [`DEFAULT_TOP_N`].
    pub top_n: usize,
}

impl Default for RankerSettings {
    fn default() -> Self {
        Self {
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Ranks eligible symbols by percentage change over an interval.
#[derive(Clone)]
pub struct GainersRanker {
    source: Arc<dyn MarketDataSource>,
    settings: RankerSettings,
}

impl GainersRanker {
    #[must_use]
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self::with_settings(source, RankerSettings::default())
    }

    #[must_use]
    pub fn with_settings(source: Arc<dyn MarketDataSource>, settings: RankerSettings) -> Self {
        Self {
            source,
            settings: RankerSettings {
                max_in_flight: settings.max_in_flight.max(1),
                top_n: settings.top_n.clamp(1, DEFAULT_TOP_N),
            },
        }
    }

    #[must_use]
    pub const fn settings(&self) -> RankerSettings {
        self.settings
    }

    /// Find the top gainers for `interval`.
    ///
    /// Returns an empty list when symbol metadata cannot be fetched or no
    /// symbol yields a change. Completes once every lookup has settled.
    pub async fn find_top_gainers(&self, interval: Interval) -> Vec<GainerEntry> {
        let started = Instant::now();
        let exchange = self.source.exchange_name();

        let symbols = match self.source.eligible_symbols().await {
            Ok(symbols) => symbols,
            Err(e) => {
                warn!(exchange, error = %e, "Failed to fetch eligible symbols");
                return Vec::new();
            }
        };

        let requested = symbols.len();
        debug!(exchange, %interval, symbols = requested, "Fetching price changes");

        let source = self.source.as_ref();
        let entries: Vec<GainerEntry> = stream::iter(symbols)
            .map(|symbol| async move {
                source
                    .percent_change(&symbol, interval)
                    .await
                    .map(|change| GainerEntry { symbol, change })
            })
            .buffer_unordered(self.settings.max_in_flight)
            .filter_map(|entry| async move { entry })
            .collect()
            .await;

        let resolved = entries.len();
        let ranked = rank_gainers(entries, self.settings.top_n);

        info!(
            exchange,
            %interval,
            requested,
            resolved,
            returned = ranked.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Ranked top gainers"
        );

        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symbol::Symbol;
    use crate::error::{Error, Result};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        changes: HashMap<String, Option<Decimal>>,
        fail_metadata: bool,
        in_flight: AtomicUsize,
        peak_in_flight: AtomicUsize,
    }

    impl FixedSource {
        fn new(changes: &[(&str, Option<Decimal>)]) -> Self {
            Self {
                changes: changes
                    .iter()
                    .map(|(s, c)| ((*s).to_string(), *c))
                    .collect(),
                fail_metadata: false,
                in_flight: AtomicUsize::new(0),
                peak_in_flight: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MarketDataSource for FixedSource {
        async fn eligible_symbols(&self) -> Result<Vec<Symbol>> {
            if self.fail_metadata {
                return Err(Error::Parse("metadata unavailable".into()));
            }
            let mut symbols: Vec<Symbol> =
                self.changes.keys().map(|s| Symbol::new(s.clone())).collect();
            symbols.sort();
            Ok(symbols)
        }

        async fn percent_change(&self, symbol: &Symbol, _interval: Interval) -> Option<Decimal> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.changes.get(symbol.as_str()).copied().flatten()
        }

        fn exchange_name(&self) -> &'static str {
            "Fixed"
        }
    }

    #[tokio::test]
    async fn skips_symbols_without_data() {
        let source = Arc::new(FixedSource::new(&[
            ("AAAUSDT", Some(dec!(5.0))),
            ("BBBUSDT", None),
            ("CCCUSDT", Some(dec!(-2.0))),
            ("DDDUSDT", Some(dec!(12.5))),
        ]));

        let ranked = GainersRanker::new(source)
            .find_top_gainers(Interval::OneMinute)
            .await;

        let symbols: Vec<_> = ranked.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["DDDUSDT", "AAAUSDT", "CCCUSDT"]);
    }

    #[tokio::test]
    async fn metadata_failure_yields_empty_list() {
        let mut source = FixedSource::new(&[("AAAUSDT", Some(dec!(1)))]);
        source.fail_metadata = true;

        let ranked = GainersRanker::new(Arc::new(source))
            .find_top_gainers(Interval::OneHour)
            .await;

        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn respects_in_flight_bound() {
        let names: Vec<String> = (0..40).map(|i| format!("S{i:02}USDT")).collect();
        let changes: Vec<(&str, Option<Decimal>)> = names
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), Some(Decimal::from(i))))
            .collect();
        let source = Arc::new(FixedSource::new(&changes));
        let ranker = GainersRanker::with_settings(
            source.clone(),
            RankerSettings {
                max_in_flight: 4,
                top_n: 10,
            },
        );

        let ranked = ranker.find_top_gainers(Interval::FiveMinutes).await;

        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].change, dec!(39));
        assert!(source.peak_in_flight.load(Ordering::SeqCst) <= 4);
    }

    #[test]
    fn zero_in_flight_is_clamped() {
        let ranker = GainersRanker::with_settings(
            Arc::new(FixedSource::new(&[])),
            RankerSettings {
                max_in_flight: 0,
                top_n: 10,
            },
        );
        assert_eq!(ranker.settings().max_in_flight, 1);
    }

    #[tokio::test]
    async fn oversized_top_n_is_capped() {
        let names: Vec<String> = (0..30).map(|i| format!("S{i:02}USDT")).collect();
        let changes: Vec<(&str, Option<Decimal>)> = names
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), Some(Decimal::from(i))))
            .collect();
        let ranker = GainersRanker::with_settings(
            Arc::new(FixedSource::new(&changes)),
            RankerSettings {
                max_in_flight: 8,
                top_n: 400,
            },
        );

        assert_eq!(ranker.settings().top_n, DEFAULT_TOP_N);
        let ranked = ranker.find_top_gainers(Interval::OneMinute).await;
        assert_eq!(ranked.len(), DEFAULT_TOP_N);
    }
}
