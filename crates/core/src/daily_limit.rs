//! Daily set-creation limit.
//!
//! The limit is process-wide and mutable at runtime through the admin page.
//! It lives in memory only; a restart resets it to the configured default.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::NaiveTime;

use crate::types::Timestamp;

/// Number of sets that may be created per UTC day unless configured otherwise.
pub const DEFAULT_DAILY_LIMIT: i64 = 20;

/// Message returned to the client when the limit has been reached.
pub const LIMIT_REACHED_MESSAGE: &str = "Daily limit reached! Try again tomorrow.";

/// Shared holder for the current daily limit.
///
/// Reads and writes are individually atomic. Concurrent updates are
/// last-write-wins.
#[derive(Debug)]
pub struct DailyLimit(AtomicI64);

impl DailyLimit {
    pub fn new(limit: i64) -> Self {
        Self(AtomicI64::new(limit))
    }

    /// Current limit.
    pub fn get(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Replace the limit, returning the previous value.
    pub fn set(&self, limit: i64) -> i64 {
        self.0.swap(limit, Ordering::Relaxed)
    }
}

impl Default for DailyLimit {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_LIMIT)
    }
}

/// Midnight (00:00:00 UTC) of the calendar day containing `now`.
pub fn start_of_utc_day(now: Timestamp) -> Timestamp {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Whether another set may be created given how many exist today.
pub fn has_capacity(count_today: i64, limit: i64) -> bool {
    count_today < limit
}
