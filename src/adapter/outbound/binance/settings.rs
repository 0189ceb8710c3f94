//! Binance exchange configuration.

use serde::Deserialize;

use crate::application::ranker::{RankerSettings, DEFAULT_MAX_IN_FLIGHT};
use crate::domain::gainer::DEFAULT_TOP_N;

/// Binance HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for BinanceHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}

/// Binance exchange configuration (`[exchange]` table).
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceConfig {
    /// REST API base URL including the version path.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Quote asset suffixes a symbol must end with to be ranked.
    #[serde(default = "default_quote_assets")]
    pub quote_assets: Vec<String>,
    /// HTTP timeouts.
    #[serde(flatten)]
    pub http: BinanceHttpConfig,
    /// Maximum concurrent kline requests per ranking.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
    /// Number of gainers shown.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_api_url() -> String {
    "https://api.binance.com/api/v3".into()
}

fn default_quote_assets() -> Vec<String> {
    vec!["USDT".into(), "BUSD".into()]
}

const fn default_max_in_flight() -> usize {
    DEFAULT_MAX_IN_FLIGHT
}

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            quote_assets: default_quote_assets(),
            http: BinanceHttpConfig::default(),
            max_in_flight: default_max_in_flight(),
            top_n: default_top_n(),
        }
    }
}

impl BinanceConfig {
    /// Ranker settings derived from this exchange configuration.
    #[must_use]
    pub const fn ranker_settings(&self) -> RankerSettings {
        RankerSettings {
            max_in_flight: self.max_in_flight,
            top_n: self.top_n,
        }
    }
}
