use chrono_tz::Tz;
use ferrous_lookup_domain::freshness::{self, Freshness};
use ferrous_lookup_domain::{CacheEntry, DomainError, LookupResult};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::{CacheEntryRepository, Clock, RecordResolver};

/// Upper bound on cache reads per request.
///
/// The longest legitimate path is Stale -> evict -> Miss -> populate -> Fresh,
/// which takes three reads; one more absorbs a concurrent populate.
pub const MAX_CACHE_PASSES: usize = 4;

/// Serves a domain's records from the cache, refreshing it when stale.
pub struct ResolveWithCacheUseCase {
    cache_repo: Arc<dyn CacheEntryRepository>,
    resolver: Arc<dyn RecordResolver>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl ResolveWithCacheUseCase {
    pub fn new(
        cache_repo: Arc<dyn CacheEntryRepository>,
        resolver: Arc<dyn RecordResolver>,
        clock: Arc<dyn Clock>,
        timezone: Tz,
    ) -> Self {
        Self {
            cache_repo,
            resolver,
            clock,
            timezone,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        force_update: bool,
    ) -> Result<LookupResult, DomainError> {
        let mut force_update = force_update;

        for pass in 1..=MAX_CACHE_PASSES {
            let Some(entry) = self.cache_repo.get(domain).await? else {
                debug!(domain = %domain, pass, "Cache miss");
                self.populate(domain).await?;
                continue;
            };

            let freshness = match entry.last_updated_at(self.timezone) {
                Ok(last_updated) => {
                    freshness::evaluate(last_updated, self.clock.now(), force_update)
                }
                Err(e) => {
                    warn!(domain = %domain, error = %e, "Unreadable cache timestamp, refreshing");
                    Freshness::Stale
                }
            };

            match freshness {
                Freshness::Fresh(decoration) => {
                    debug!(
                        domain = %domain,
                        pass,
                        last_updated = %entry.last_updated,
                        "Cache hit"
                    );
                    return Ok(LookupResult::decorate(entry, decoration));
                }
                Freshness::Stale => {
                    info!(
                        domain = %domain,
                        forced = force_update,
                        last_updated = %entry.last_updated,
                        "Evicting stale cache entry"
                    );
                    self.cache_repo.delete(domain).await?;
                    // The refreshed entry must not be judged against the same request.
                    force_update = false;
                }
            }
        }

        warn!(domain = %domain, passes = MAX_CACHE_PASSES, "Cache refresh did not settle");
        Err(DomainError::RefreshLoopExceeded(domain.to_string()))
    }

    async fn populate(&self, domain: &str) -> Result<(), DomainError> {
        let records = self.resolver.lookup(domain).await?;
        let entry = CacheEntry::new(domain, records.to_json(), self.clock.now(), self.timezone);

        match self.cache_repo.insert(&entry).await {
            Ok(()) => {
                info!(
                    domain = %domain,
                    records = records.len(),
                    last_updated = %entry.last_updated,
                    "Cache entry stored"
                );
                Ok(())
            }
            Err(DomainError::CacheEntryConflict(_)) => {
                debug!(domain = %domain, "Entry stored by a concurrent request");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
