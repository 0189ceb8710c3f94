//! Message formatting for Telegram replies.
//!
//! All text is `MarkdownV2`; anything dynamic goes through [`escape_markdown`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::gainer::GainerEntry;
use crate::domain::interval::Interval;

/// Greeting sent for `/start` and `/help`.
#[must_use]
pub fn start_text(menu_command: &str) -> String {
    format!(
        "📊 *Binance Gainers Bot*\n\
        \n\
        Welcome\\!\n\
        \n\
        To see the coins that rose the most 👇\n\
        use the /{} command\\.",
        escape_markdown(menu_command)
    )
}

/// Prompt shown above the interval keyboard.
#[must_use]
pub const fn menu_prompt() -> &'static str {
    "⏱ *Which interval should be analysed?*"
}

/// Alert shown when an interval button is tapped. Plain text.
#[must_use]
pub const fn acknowledge_text() -> &'static str {
    "Calculation started. Please wait..."
}

/// Inline button caption for an interval. Plain text.
#[must_use]
pub fn button_label(interval: Interval) -> String {
    format!("Last {}", interval.label())
}

/// Placeholder posted while the ranking runs.
#[must_use]
pub fn loading_text(interval: Interval) -> String {
    format!(
        "⏳ Calculating data for the last *{}*\\.\\.\\.",
        escape_markdown(interval.label())
    )
}

/// Final ranked list, or a warning when there is nothing to show.
#[must_use]
pub fn gainers_text(interval: Interval, entries: &[GainerEntry]) -> String {
    let label = escape_markdown(interval.label());

    if entries.is_empty() {
        return format!(
            "⚠️ *No data could be retrieved for the last {label}, \
            or no coin showed a gain\\.* Please try again later\\."
        );
    }

    let mut msg = format!(
        "📈 *Top {} gainers in the last {label}:*\n\n",
        entries.len()
    );

    for (i, entry) in entries.iter().enumerate() {
        msg.push_str(&format!(
            "{}\\. *{}*: {}%\n",
            i + 1,
            escape_markdown(entry.symbol.as_str()),
            escape_markdown(&format_change(entry.change))
        ));
    }

    msg
}

/// Round a percentage to two decimals, halves away from zero.
#[must_use]
pub fn format_change(change: Decimal) -> String {
    let rounded = change.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
