//! Exchange-agnostic domain logic.

pub mod gainer;
pub mod interval;
pub mod symbol;

pub use gainer::{percent_change, rank_gainers, GainerEntry};
pub use interval::Interval;
pub use symbol::{Symbol, SymbolListing, TradingStatus};
