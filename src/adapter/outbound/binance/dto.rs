//! Binance REST response types.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::symbol::{SymbolListing, TradingStatus};

/// Index of the close price within a kline array.
const KLINE_CLOSE_INDEX: usize = 4;

/// `GET /exchangeInfo` response (only the fields we use).
#[derive(Debug, Deserialize)]
pub struct ExchangeInfoResponse {
    pub symbols: Vec<SymbolInfo>,
}

/// One instrument in `exchangeInfo`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
}

impl From<SymbolInfo> for SymbolListing {
    fn from(info: SymbolInfo) -> Self {
        Self::new(info.symbol, TradingStatus::parse(&info.status))
    }
}

/// Previous and current close extracted from a `GET /klines` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosePair {
    pub previous: Decimal,
    pub current: Decimal,
}

impl ClosePair {
    /// Extract the last two closes from a klines payload.
    ///
    /// Klines are arrays ordered oldest first, with the close price as a
    /// decimal string at index 4. Returns `None` for anything else.
    #[must_use]
    pub fn from_klines(payload: &Value) -> Option<Self> {
        let klines = payload.as_array()?;
        if klines.len() < 2 {
            return None;
        }
        let tail = &klines[klines.len() - 2..];
        Some(Self {
            previous: close_of(&tail[0])?,
            current: close_of(&tail[1])?,
        })
    }
}

fn close_of(kline: &Value) -> Option<Decimal> {
    match kline.as_array()?.get(KLINE_CLOSE_INDEX)? {
        Value::String(raw) => Decimal::from_str(raw).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn kline(close: &str) -> Value {
        json!([1_700_000_000_000u64, "1.0", "2.0", "0.5", close, "100.0", 1_700_000_059_999u64])
    }

    #[test]
    fn extracts_previous_and_current_close() {
        let payload = json!([kline("100.00000000"), kline("110.00000000")]);

        let pair = ClosePair::from_klines(&payload).unwrap();

        assert_eq!(pair.previous, dec!(100));
        assert_eq!(pair.current, dec!(110));
    }

    #[test]
    fn uses_last_two_klines() {
        let payload = json!([kline("1"), kline("2"), kline("3")]);

        let pair = ClosePair::from_klines(&payload).unwrap();

        assert_eq!(pair, ClosePair { previous: dec!(2), current: dec!(3) });
    }

    #[test]
    fn rejects_short_or_malformed_payloads() {
        assert_eq!(ClosePair::from_klines(&json!([kline("1")])), None);
        assert_eq!(ClosePair::from_klines(&json!({"code": -1121})), None);
        assert_eq!(ClosePair::from_klines(&json!([[1, 2], [3, 4]])), None);
        assert_eq!(
            ClosePair::from_klines(&json!([kline("abc"), kline("1")])),
            None
        );
    }

    #[test]
    fn parses_exchange_info() {
        let raw = r#"{
            "timezone": "UTC",
            "symbols": [
                {"symbol": "BTCUSDT", "status": "TRADING", "quoteAsset": "USDT", "baseAsset": "BTC"},
                {"symbol": "ADAUSDT", "status": "BREAK"}
            ]
        }"#;

        let info: ExchangeInfoResponse = serde_json::from_str(raw).unwrap();
        let listings: Vec<SymbolListing> = info.symbols.into_iter().map(Into::into).collect();

        assert_eq!(listings.len(), 2);
        assert!(listings[0].status.is_trading());
        assert!(!listings[1].status.is_trading());
    }
}
