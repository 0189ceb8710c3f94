//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the Telegram bot token comes only
//! from the `TELEGRAM_BOT_TOKEN` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use gainerbot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::liveness::LivenessConfig;
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::binance::settings::BinanceConfig;
use crate::domain::gainer::DEFAULT_TOP_N;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty file yields [`Config::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Exchange REST API and ranking settings.
    #[serde(default)]
    pub exchange: BinanceConfig,

    /// Telegram bot settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Liveness HTTP endpoint.
    #[serde(default)]
    pub liveness: LivenessConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, using defaults if it does not exist.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            let config = Self::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Parsed liveness bind address.
    #[allow(clippy::result_large_err)]
    pub fn liveness_addr(&self) -> Result<SocketAddr> {
        self.liveness.bind.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidValue {
                field: "bind",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let exchange = &self.exchange;
        if exchange.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if exchange.quote_assets.iter().all(|q| q.trim().is_empty()) {
            return Err(ConfigError::MissingField {
                field: "quote_assets",
            }
            .into());
        }
        if exchange.max_in_flight == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_in_flight",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if exchange.top_n == 0 || exchange.top_n > DEFAULT_TOP_N {
            return Err(ConfigError::InvalidValue {
                field: "top_n",
                reason: format!("must be between 1 and {DEFAULT_TOP_N}"),
            }
            .into());
        }
        if exchange.http.timeout_ms == 0 || exchange.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "timeouts must be greater than 0".to_string(),
            }
            .into());
        }

        let menu = &self.telegram.menu_command;
        if menu.is_empty() {
            return Err(ConfigError::MissingField {
                field: "menu_command",
            }
            .into());
        }
        if !menu
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ConfigError::InvalidValue {
                field: "menu_command",
                reason: "use lowercase letters, digits and underscores, without '/'".to_string(),
            }
            .into());
        }
        if matches!(menu.as_str(), "start" | "help") {
            return Err(ConfigError::InvalidValue {
                field: "menu_command",
                reason: "must not shadow /start or /help".to_string(),
            }
            .into());
        }

        if self.liveness.enabled {
            self.liveness_addr()?;
        }

        Ok(())
    }
}
