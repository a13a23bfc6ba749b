//! Ferrous Lookup Domain Layer
pub mod cache_entry;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod freshness;
pub mod timestamp;

pub use cache_entry::{CacheEntry, LookupResult};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{DnsRecordEntry, DnsRecordSet, RecordType};
pub use errors::DomainError;
pub use freshness::{Decoration, Elapsed, Freshness};
