//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use crate::adapter::outbound::binance::BinanceClient;
use crate::application::ranker::GainersRanker;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::exchange::MarketDataSource;

/// Build the gainers ranker backed by the Binance REST client.
#[must_use]
pub fn build_ranker(config: &Config) -> GainersRanker {
    let source: Arc<dyn MarketDataSource> = Arc::new(BinanceClient::from_config(&config.exchange));
    GainersRanker::with_settings(source, config.exchange.ranker_settings())
}

/// Run the bot and, when enabled, the liveness endpoint.
///
/// Returns when the Telegram dispatcher stops or the liveness server fails.
#[cfg(feature = "telegram")]
pub async fn run(config: Config) -> Result<()> {
    use crate::adapter::inbound::liveness;
    use crate::adapter::inbound::telegram::bot::run_bot;
    use crate::adapter::inbound::telegram::{IntervalFlow, TelegramConfig};
    use crate::application::metrics::RequestMetrics;
    use crate::error::ConfigError;
    use tracing::info;

    let telegram = TelegramConfig::from_env(&config.telegram.menu_command).ok_or(
        ConfigError::MissingField {
            field: "TELEGRAM_BOT_TOKEN",
        },
    )?;

    let metrics = Arc::new(RequestMetrics::new());
    let flow = IntervalFlow::new(build_ranker(&config), Arc::clone(&metrics));

    info!(
        api_url = %config.exchange.api_url,
        quote_assets = ?config.exchange.quote_assets,
        max_in_flight = config.exchange.max_in_flight,
        "Starting gainerbot"
    );

    if config.liveness.enabled {
        let addr = config.liveness_addr()?;
        tokio::select! {
            () = run_bot(telegram, flow) => Ok(()),
            result = liveness::serve(addr, metrics) => result,
        }
    } else {
        run_bot(telegram, flow).await;
        Ok(())
    }
}

/// Without the `telegram` feature there is no bot to run.
#[cfg(not(feature = "telegram"))]
pub async fn run(_config: Config) -> Result<()> {
    Err(crate::error::ConfigError::InvalidValue {
        field: "telegram",
        reason: "gainerbot was built without the telegram feature".to_string(),
    }
    .into())
}
