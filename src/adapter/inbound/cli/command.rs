//! Command-line interface definitions.
//!
//! Defines the CLI structure for gainerbot using `clap`. The default
//! subcommand runs the Telegram bot; `top` prints a ranking once.

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::gainer::DEFAULT_TOP_N;
use crate::domain::interval::Interval;

/// Telegram bot ranking the top Binance gainers
#[derive(Parser, Debug)]
#[command(name = "gainerbot")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the gainerbot CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (default)
    Run(RunArgs),

    /// Print the top gainers for one interval and exit
    Top(TopArgs),

    /// List supported intervals
    Intervals,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the configured log level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    pub json_logs: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from("config.toml"),
            log_level: None,
            json_logs: false,
        }
    }
}

/// Arguments for the `top` subcommand.
#[derive(Args, Debug, Clone)]
pub struct TopArgs {
    /// Interval token, e.g. 1m, 5m, 1h
    pub interval: Interval,

    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Number of entries to print, 1 to 10 (overrides config)
    #[arg(
        short = 'n',
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=DEFAULT_TOP_N as u64)
    )]
    pub limit: Option<usize>,
}
