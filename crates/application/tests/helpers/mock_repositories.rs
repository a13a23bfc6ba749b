#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use ferrous_lookup_application::ports::{CacheEntryRepository, Clock, RecordResolver};
use ferrous_lookup_domain::{
    CacheEntry, DnsRecordEntry, DnsRecordSet, DomainError, RecordType,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock Clock
// ============================================================================

pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ============================================================================
// Mock CacheEntryRepository
// ============================================================================

#[derive(Default)]
pub struct MockCacheRepository {
    entries: RwLock<HashMap<String, CacheEntry>>,
    operations: Mutex<Vec<&'static str>>,
    fail: RwLock<bool>,
    ignore_deletes: RwLock<bool>,
    concurrent_insert: RwLock<Option<CacheEntry>>,
}

impl MockCacheRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, entry: CacheEntry) {
        self.entries
            .write()
            .await
            .insert(entry.domain.clone(), entry);
    }

    pub async fn entry(&self, domain: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(domain).cloned()
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Every subsequent call fails with a database error
    pub async fn set_should_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }

    /// Deletes report success but leave the row in place
    pub async fn set_ignore_deletes(&self, ignore: bool) {
        *self.ignore_deletes.write().await = ignore;
    }

    /// The next insert loses a race against `entry`
    pub async fn set_concurrent_insert(&self, entry: CacheEntry) {
        *self.concurrent_insert.write().await = Some(entry);
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.operations.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str) {
        self.operations.lock().unwrap().push(op);
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock database unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheEntryRepository for MockCacheRepository {
    async fn ensure_schema(&self) -> Result<(), DomainError> {
        self.check_failure().await
    }

    async fn get(&self, domain: &str) -> Result<Option<CacheEntry>, DomainError> {
        self.record("get");
        self.check_failure().await?;
        Ok(self.entries.read().await.get(domain).cloned())
    }

    async fn delete(&self, domain: &str) -> Result<(), DomainError> {
        self.record("delete");
        self.check_failure().await?;
        if !*self.ignore_deletes.read().await {
            self.entries.write().await.remove(domain);
        }
        Ok(())
    }

    async fn insert(&self, entry: &CacheEntry) -> Result<(), DomainError> {
        self.record("insert");
        self.check_failure().await?;

        if let Some(winner) = self.concurrent_insert.write().await.take() {
            self.entries
                .write()
                .await
                .insert(winner.domain.clone(), winner);
        }

        let mut entries = self.entries.write().await;
        if entries.contains_key(&entry.domain) {
            return Err(DomainError::CacheEntryConflict(entry.domain.clone()));
        }
        entries.insert(entry.domain.clone(), entry.clone());
        Ok(())
    }
}

// ============================================================================
// Mock RecordResolver
// ============================================================================

#[derive(Default)]
pub struct MockRecordResolver {
    responses: RwLock<HashMap<String, DnsRecordSet>>,
    calls: AtomicUsize,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, domain: &str, records: DnsRecordSet) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), records);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn lookup(&self, domain: &str) -> Result<DnsRecordSet, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .read()
            .await
            .get(domain)
            .cloned()
            .ok_or_else(|| DomainError::DnsNotFound(domain.to_string()))
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn example_records() -> DnsRecordSet {
    DnsRecordSet::from_merged(
        vec![
            DnsRecordEntry::new("example.com", RecordType::A, 300).with("ip", "192.0.2.10"),
            DnsRecordEntry::new("example.com", RecordType::NS, 3600)
                .with("target", "ns1.example.com"),
        ],
        vec![DnsRecordEntry::new("www.example.com", RecordType::A, 300).with("ip", "192.0.2.11")],
    )
}

pub struct Harness {
    pub repo: Arc<MockCacheRepository>,
    pub resolver: Arc<MockRecordResolver>,
    pub clock: Arc<MockClock>,
}

impl Harness {
    pub async fn new() -> Self {
        let resolver = Arc::new(MockRecordResolver::new());
        resolver.set_response("example.com", example_records()).await;

        Self {
            repo: Arc::new(MockCacheRepository::new()),
            resolver,
            clock: Arc::new(MockClock::new()),
        }
    }
}
