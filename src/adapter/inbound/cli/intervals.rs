//! Handler for the `intervals` command.

use crate::domain::interval::Interval;

/// Print every supported interval with its callback identifier.
pub fn execute() {
    for interval in Interval::ALL {
        println!(
            "{:<4} {:<11} {}",
            interval.api_token(),
            interval.label(),
            interval.callback_data()
        );
    }
}
