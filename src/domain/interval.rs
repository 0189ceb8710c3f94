//! Supported kline intervals.
//!
//! Each interval ties together the callback identifier carried by the
//! Telegram inline button, the Binance interval token, and a human label.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Prefix shared by every interval callback identifier.
pub const CALLBACK_PREFIX: &str = "int_";

/// A kline granularity the bot can rank over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    OneMinute,
    ThreeMinutes,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    FourHours,
    OneDay,
}

impl Interval {
    /// All intervals in menu order.
    pub const ALL: [Self; 8] = [
        Self::OneMinute,
        Self::ThreeMinutes,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::OneHour,
        Self::FourHours,
        Self::OneDay,
    ];

    /// Binance interval token (`interval` query parameter).
    #[must_use]
    pub const fn api_token(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::ThreeMinutes => "3m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::FourHours => "4h",
            Self::OneDay => "1d",
        }
    }

    /// Human-readable duration, e.g. `15 minutes`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneMinute => "1 minute",
            Self::ThreeMinutes => "3 minutes",
            Self::FiveMinutes => "5 minutes",
            Self::FifteenMinutes => "15 minutes",
            Self::ThirtyMinutes => "30 minutes",
            Self::OneHour => "1 hour",
            Self::FourHours => "4 hours",
            Self::OneDay => "1 day",
        }
    }

    /// Callback identifier carried by the inline button, e.g. `int_5m`.
    #[must_use]
    pub fn callback_data(self) -> String {
        format!("{CALLBACK_PREFIX}{}", self.api_token())
    }

    /// Resolve an inline button callback identifier.
    #[must_use]
    pub fn from_callback_data(data: &str) -> Option<Self> {
        data.strip_prefix(CALLBACK_PREFIX)?.parse().ok()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_token())
    }
}

/// Error returned when an interval token is not supported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown interval `{0}` (use: {supported})", supported = supported_tokens())]
pub struct UnknownInterval(pub String);

fn supported_tokens() -> String {
    Interval::ALL
        .iter()
        .map(|i| i.api_token())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Interval {
    type Err = UnknownInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.api_token() == s)
            .ok_or_else(|| UnknownInterval(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_data_round_trips_for_every_interval() {
        for interval in Interval::ALL {
            assert_eq!(
                Interval::from_callback_data(&interval.callback_data()),
                Some(interval)
            );
        }
    }

    #[test]
    fn callback_data_uses_api_token() {
        assert_eq!(Interval::OneMinute.callback_data(), "int_1m");
        assert_eq!(Interval::OneDay.callback_data(), "int_1d");
    }

    #[test]
    fn rejects_unknown_callback_data() {
        assert_eq!(Interval::from_callback_data("int_10m"), None);
        assert_eq!(Interval::from_callback_data("5m"), None);
        assert_eq!(Interval::from_callback_data(""), None);
    }

    #[test]
    fn parse_error_lists_supported_tokens() {
        let err = "2w".parse::<Interval>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`2w`"));
        assert!(message.contains("1m, 3m, 5m"));
    }
}
