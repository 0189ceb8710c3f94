//! Handler for the `top` command.

use crate::adapter::inbound::cli::command::TopArgs;
use crate::adapter::inbound::telegram::format::format_change;
use crate::domain::gainer::{GainerEntry, DEFAULT_TOP_N};
use crate::domain::interval::Interval;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Rank once and print the result to stdout.
pub async fn execute(args: &TopArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(limit) = args.limit {
        config.exchange.top_n = limit.clamp(1, DEFAULT_TOP_N);
    }
    config.init_logging();

    let ranker = bootstrap::build_ranker(&config);
    let entries = ranker.find_top_gainers(args.interval).await;

    print!("{}", render_table(args.interval, &entries));
    Ok(())
}

/// Plain-text ranking for terminal output.
#[must_use]
pub fn render_table(interval: Interval, entries: &[GainerEntry]) -> String {
    if entries.is_empty() {
        return format!("No gainers found for the last {}.\n", interval.label());
    }

    let width = entries
        .iter()
        .map(|e| e.symbol.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = format!("Top {} gainers, last {}\n", entries.len(), interval.label());
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<width$}  {:>8}%\n",
            i + 1,
            entry.symbol.as_str(),
            format_change(entry.change)
        ));
    }
    out
}
