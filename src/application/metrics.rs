//! Request metrics owned by the bot dispatcher.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

/// Counters updated once per completed ranking interaction.
#[derive(Debug)]
pub struct RequestMetrics {
    served: AtomicU64,
    started_at: DateTime<Utc>,
    last_served_at: RwLock<Option<DateTime<Utc>>>,
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self {
            served: AtomicU64::new(0),
            started_at: Utc::now(),
            last_served_at: RwLock::new(None),
        }
    }
}

impl RequestMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed interaction and return the new total.
    pub fn record_served(&self) -> u64 {
        *self.last_served_at.write() = Some(Utc::now());
        self.served.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[must_use]
    pub fn served(&self) -> u64 {
        self.served.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn last_served_at(&self) -> Option<DateTime<Utc>> {
        *self.last_served_at.read()
    }

    /// Seconds since the metrics were created.
    #[must_use]
    pub fn uptime_secs(&self) -> u64 {
        let elapsed = Utc::now() - self.started_at;
        u64::try_from(elapsed.num_seconds()).unwrap_or(0)
    }
}

/// Format seconds as `HH:MM:SS`.
#[must_use]
pub fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
