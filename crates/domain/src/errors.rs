use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("No DNS records found for {0}")]
    DnsNotFound(String),

    #[error("Failed to encode DNS query: {0}")]
    QueryEncoding(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache integrity violation: {0}")]
    CacheIntegrity(String),

    #[error("Cache entry already exists: {0}")]
    CacheEntryConflict(String),

    #[error("Cache refresh did not settle for {0}")]
    RefreshLoopExceeded(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl DomainError {
    /// True for failures of the persistent cache rather than of DNS resolution.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            DomainError::DatabaseError(_)
                | DomainError::CacheIntegrity(_)
                | DomainError::CacheEntryConflict(_)
                | DomainError::RefreshLoopExceeded(_)
                | DomainError::InvalidTimestamp(_)
        )
    }
}
