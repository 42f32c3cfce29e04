use chrono::Duration;
use paycalc_core::RateTable;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{Clock, RateCache, RateSource, SystemClock};

/// Serves exchange-rate tables from a [`RateSource`] behind a [`RateCache`].
///
/// Lookups never fail: when the source errors or reports `success: false`
/// the built-in [`RateTable::fallback`] is returned. The fallback is not
/// cached, so the next lookup tries the source again. A provider answering
/// in another base is requoted against the requested one before caching.
pub struct RateService<S, C = SystemClock> {
    source: S,
    clock: C,
    cache: Mutex<RateCache>,
}

impl<S: RateSource> RateService<S> {
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock, RateCache::default().ttl())
    }
}

impl<S: RateSource, C: Clock> RateService<S, C> {
    pub fn with_clock(
        source: S,
        clock: C,
        ttl: Duration,
    ) -> Self {
        Self {
            source,
            clock,
            cache: Mutex::new(RateCache::new(ttl)),
        }
    }

    /// Rates quoted against `base`.
    pub async fn rates(&self, base: &str) -> RateTable {
        let base = base.trim().to_ascii_uppercase();
        let mut cache = self.cache.lock().await;

        if let Some(table) = cache.get(&base, self.clock.now()) {
            debug!(%base, "serving cached rates");
            return table.clone();
        }

        match self.source.fetch(&base).await {
            Ok(response) if response.success => {
                let Some(table) = quoted_against(response.into_table(&base), &base) else {
                    warn!(%base, "provider rates do not cover the base, using fallback rates");
                    return fallback_for(&base);
                };
                debug!(%base, currencies = table.rates.len(), "fetched rates");
                cache.set(&base, table.clone(), self.clock.now());
                table
            }
            Ok(_) => {
                warn!(%base, "rate provider reported failure, using fallback rates");
                fallback_for(&base)
            }
            Err(error) => {
                warn!(%base, %error, "rate fetch failed, using fallback rates");
                fallback_for(&base)
            }
        }
    }
}

/// `table` requoted against `base` when the provider answered in another
/// base currency.
fn quoted_against(
    table: RateTable,
    base: &str,
) -> Option<RateTable> {
    if table.base.eq_ignore_ascii_case(base) {
        return Some(table);
    }
    debug!(%base, provider_base = %table.base, "rebasing provider rates");
    table.rebased(base)
}

fn fallback_for(base: &str) -> RateTable {
    let fallback = RateTable::fallback();
    if fallback.base == base {
        return fallback;
    }
    fallback.rebased(base).unwrap_or(fallback)
}
