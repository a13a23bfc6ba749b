use async_trait::async_trait;
use ferrous_lookup_application::ports::CacheEntryRepository;
use ferrous_lookup_domain::{CacheEntry, DomainError};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

type CacheRow = (String, String, String);

pub struct SqliteCacheEntryRepository {
    pool: SqlitePool,
}

impl SqliteCacheEntryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: CacheRow) -> CacheEntry {
        let (domain, data, last_updated) = row;

        CacheEntry {
            domain,
            data,
            last_updated,
        }
    }
}

#[async_trait]
impl CacheEntryRepository for SqliteCacheEntryRepository {
    #[instrument(skip(self))]
    async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS dns_cache (
                domain TEXT PRIMARY KEY NOT NULL,
                data TEXT NOT NULL,
                last_updated TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create dns_cache table");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, domain: &str) -> Result<Option<CacheEntry>, DomainError> {
        let mut rows = sqlx::query_as::<_, CacheRow>(
            "SELECT domain, data, last_updated FROM dns_cache WHERE domain = ?",
        )
        .bind(domain)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query cache entry");
            DomainError::DatabaseError(e.to_string())
        })?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop().map(Self::row_to_entry)),
            n => {
                error!(domain = %domain, rows = n, "Duplicate cache rows for domain");
                Err(DomainError::CacheIntegrity(format!(
                    "{} rows for domain '{}'",
                    n, domain
                )))
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, domain: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM dns_cache WHERE domain = ?")
            .bind(domain)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete cache entry");
                DomainError::DatabaseError(e.to_string())
            })?;

        debug!(rows = result.rows_affected(), "Cache entry deleted");
        Ok(())
    }

    #[instrument(skip(self, entry), fields(domain = %entry.domain))]
    async fn insert(&self, entry: &CacheEntry) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO dns_cache (domain, data, last_updated) VALUES (?, ?, ?)")
            .bind(&entry.domain)
            .bind(&entry.data)
            .bind(&entry.last_updated)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e.to_string().contains("UNIQUE constraint failed") {
                    DomainError::CacheEntryConflict(entry.domain.clone())
                } else {
                    error!(error = %e, "Failed to insert cache entry");
                    DomainError::DatabaseError(e.to_string())
                }
            })?;

        Ok(())
    }
}
