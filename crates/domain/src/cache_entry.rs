use crate::freshness::Decoration;
use crate::timestamp::{format_timestamp, parse_timestamp};
use crate::DomainError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Persisted cache row: one per domain, replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub domain: String,
    /// JSON-encoded record sequence.
    pub data: String,
    /// Wall-clock insert time in the configured timezone.
    pub last_updated: String,
}

impl CacheEntry {
    pub fn new(domain: &str, data: String, inserted_at: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            domain: domain.to_string(),
            data,
            last_updated: format_timestamp(inserted_at, tz),
        }
    }

    pub fn last_updated_at(&self, tz: Tz) -> Result<DateTime<Utc>, DomainError> {
        parse_timestamp(&self.last_updated, tz)
    }
}

/// Response document for a successful lookup.
///
/// `data` is left as the stored JSON string, so callers see it encoded a
/// second time inside this document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub domain: String,
    pub data: String,
    pub last_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_till_manual_update: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_till_auto_update: Option<i64>,
}

impl LookupResult {
    pub fn decorate(entry: CacheEntry, decoration: Decoration) -> Self {
        Self {
            domain: entry.domain,
            data: entry.data,
            last_updated: entry.last_updated,
            minutes_till_manual_update: decoration.minutes_till_manual_update,
            hours_till_auto_update: decoration.hours_till_auto_update,
        }
    }
}
