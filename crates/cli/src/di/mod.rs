use ferrous_lookup_api::AppState;
use ferrous_lookup_application::ports::CacheEntryRepository;
use ferrous_lookup_application::use_cases::ResolveWithCacheUseCase;
use ferrous_lookup_domain::Config;
use ferrous_lookup_infrastructure::dns::HickoryRecordResolver;
use ferrous_lookup_infrastructure::repositories::SqliteCacheEntryRepository;
use ferrous_lookup_infrastructure::system::SystemClock;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Wires the infrastructure adapters into the lookup use case.
pub struct Services {
    pub resolve_with_cache: Arc<ResolveWithCacheUseCase>,
}

impl Services {
    pub async fn new(config: &Config, pool: SqlitePool) -> anyhow::Result<Self> {
        let cache_repo = Arc::new(SqliteCacheEntryRepository::new(pool));
        cache_repo.ensure_schema().await?;

        let upstream: SocketAddr = config.resolver.upstream.parse()?;
        let resolver = Arc::new(HickoryRecordResolver::new(
            upstream,
            Duration::from_millis(config.resolver.timeout_ms),
        ));

        let timezone = config.cache.tz()?;
        info!(upstream = %upstream, timezone = %timezone, "Lookup services ready");

        Ok(Self {
            resolve_with_cache: Arc::new(ResolveWithCacheUseCase::new(
                cache_repo,
                resolver,
                Arc::new(SystemClock),
                timezone,
            )),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            resolve_with_cache: self.resolve_with_cache.clone(),
        }
    }
}
