use async_trait::async_trait;
use ferrous_lookup_domain::{DnsRecordSet, DomainError};

#[async_trait]
pub trait RecordResolver: Send + Sync {
    /// Collects the apex and `www.` records for `domain`, merged and sorted.
    ///
    /// # Errors
    ///
    /// * `DomainError::DnsNotFound` - The apex produced no usable records,
    ///   whether the answers were empty or every query failed
    async fn lookup(&self, domain: &str) -> Result<DnsRecordSet, DomainError>;
}
