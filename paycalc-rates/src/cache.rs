//! Time-limited cache of exchange-rate tables, keyed by base currency.
//!
//! The cache never reads the clock itself; callers pass `now` so that tests
//! can drive expiry with a fake [`Clock`].

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use paycalc_core::RateTable;

pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
struct CachedTable {
    table: RateTable,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RateCache {
    ttl: Duration,
    entries: HashMap<String, CachedTable>,
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_TTL_HOURS))
    }
}

impl RateCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The table for `base` if it is still fresh at `now`.
    pub fn get(
        &self,
        base: &str,
        now: DateTime<Utc>,
    ) -> Option<&RateTable> {
        if self.is_expired(base, now) {
            return None;
        }
        self.entries
            .get(&base.to_ascii_uppercase())
            .map(|entry| &entry.table)
    }

    pub fn set(
        &mut self,
        base: &str,
        table: RateTable,
        now: DateTime<Utc>,
    ) {
        self.entries.insert(
            base.to_ascii_uppercase(),
            CachedTable {
                table,
                fetched_at: now,
            },
        );
    }

    /// True when there is no entry for `base` or it is older than the TTL.
    pub fn is_expired(
        &self,
        base: &str,
        now: DateTime<Utc>,
    ) -> bool {
        match self.entries.get(&base.to_ascii_uppercase()) {
            Some(entry) => now - entry.fetched_at >= self.ttl,
            None => true,
        }
    }
}
