//! Binance REST API client.
//!
//! Two endpoints are used:
//! - `GET /exchangeInfo` for the tradable symbol list
//! - `GET /klines?symbol=..&interval=..&limit=2` for the last two closes

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::dto::{ClosePair, ExchangeInfoResponse};
use super::settings::BinanceConfig;
use crate::domain::gainer::percent_change;
use crate::domain::interval::Interval;
use crate::domain::symbol::{filter_eligible, Symbol, SymbolListing};
use crate::error::Result;
use crate::port::outbound::exchange::MarketDataSource;

/// Number of klines requested per symbol.
const KLINE_LIMIT: u32 = 2;

/// HTTP client for the Binance public REST API.
pub struct BinanceClient {
    http: HttpClient,
    base_url: String,
    quote_assets: Vec<String>,
}

impl BinanceClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Arguments
    ///
    /// * `base_url` - REST base URL including version path
    ///   (e.g., `https://api.binance.com/api/v3`)
    /// * `quote_assets` - Allowed quote suffixes (e.g., `USDT`, `BUSD`)
    #[must_use]
    pub fn new(base_url: impl Into<String>, quote_assets: Vec<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: trim_base_url(base_url.into()),
            quote_assets,
        }
    }

    #[must_use]
    pub fn from_config(config: &BinanceConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: trim_base_url(config.api_url.clone()),
            quote_assets: config.quote_assets.clone(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch every listing from `exchangeInfo`.
    pub async fn get_listings(&self) -> Result<Vec<SymbolListing>> {
        let url = format!("{}/exchangeInfo", self.base_url);

        info!(url = %url, "Fetching exchange info");

        let payload = self.get_json(self.http.get(&url)).await?;
        let response: ExchangeInfoResponse = serde_json::from_value(payload)?;
        debug!(count = response.symbols.len(), "Fetched listings from Binance");

        Ok(response.symbols.into_iter().map(Into::into).collect())
    }

    /// Fetch the last two closes for `symbol`.
    ///
    /// `Ok(None)` means the exchange answered but the payload held fewer
    /// than two usable klines.
    pub async fn get_close_pair(
        &self,
        symbol: &Symbol,
        interval: Interval,
    ) -> Result<Option<ClosePair>> {
        let url = format!("{}/klines", self.base_url);
        let limit = KLINE_LIMIT.to_string();
        let query = [
            ("symbol", symbol.as_str()),
            ("interval", interval.api_token()),
            ("limit", limit.as_str()),
        ];

        let payload = self.get_json(self.http.get(&url).query(&query)).await?;
        Ok(ClosePair::from_klines(&payload))
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn is_rate_limited(err: &reqwest::Error) -> bool {
    err.status() == Some(StatusCode::TOO_MANY_REQUESTS)
}

#[async_trait]
impl MarketDataSource for BinanceClient {
    async fn eligible_symbols(&self) -> Result<Vec<Symbol>> {
        let listings = self.get_listings().await?;
        let total = listings.len();
        let eligible = filter_eligible(listings, self.quote_assets.as_slice());

        debug!(total, eligible = eligible.len(), "Filtered eligible symbols");

        Ok(eligible)
    }

    async fn percent_change(&self, symbol: &Symbol, interval: Interval) -> Option<Decimal> {
        match self.get_close_pair(symbol, interval).await {
            Ok(Some(pair)) => percent_change(pair.previous, pair.current),
            Ok(None) => {
                debug!(symbol = %symbol, %interval, "Not enough kline data");
                None
            }
            Err(crate::error::Error::Http(err)) if is_rate_limited(&err) => {
                warn!(symbol = %symbol, "Rate limited (429) fetching klines");
                None
            }
            Err(err) => {
                warn!(symbol = %symbol, error = %err, "Failed to fetch klines");
                None
            }
        }
    }

    fn exchange_name(&self) -> &'static str {
        "Binance"
    }
}
