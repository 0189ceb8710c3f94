//! Binance payload builders.

/// `exchangeInfo` body with `(symbol, status)` pairs.
pub fn exchange_info(symbols: &[(&str, &str)]) -> String {
    let entries: Vec<String> = symbols
        .iter()
        .map(|(symbol, status)| {
            format!(r#"{{"symbol":"{symbol}","status":"{status}","baseAsset":"X","quoteAsset":"Y"}}"#)
        })
        .collect();
    format!(r#"{{"timezone":"UTC","serverTime":0,"symbols":[{}]}}"#, entries.join(","))
}

/// `klines` body with the given close prices, oldest first.
pub fn klines(closes: &[&str]) -> String {
    let rows: Vec<String> = closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            format!(
                r#"[{open},"1.0","2.0","0.5","{close}","10.0",{closing},"10.0",5,"1.0","1.0","0"]"#,
                open = 1_700_000_000_000u64 + i as u64 * 60_000,
                closing = 1_700_000_059_999u64 + i as u64 * 60_000,
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}
