use async_trait::async_trait;
use ferrous_lookup_domain::{CacheEntry, DomainError};

/// Repository interface for the per-domain lookup cache.
///
/// Rows are never updated in place: a refresh is a `delete` followed by an
/// `insert`.
#[async_trait]
pub trait CacheEntryRepository: Send + Sync {
    /// Creates the backing table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<(), DomainError>;

    /// Fetches the entry for `domain`.
    ///
    /// # Errors
    ///
    /// * `DomainError::CacheIntegrity` - More than one row exists for the domain
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn get(&self, domain: &str) -> Result<Option<CacheEntry>, DomainError>;

    /// Removes the entry for `domain`; a missing row is not an error.
    async fn delete(&self, domain: &str) -> Result<(), DomainError>;

    /// Stores a new entry.
    ///
    /// # Errors
    ///
    /// * `DomainError::CacheEntryConflict` - A row for the domain already exists
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn insert(&self, entry: &CacheEntry) -> Result<(), DomainError>;
}
