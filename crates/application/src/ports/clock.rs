use chrono::{DateTime, Utc};

/// Source of the current time for cache decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
