use crate::DomainError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Wall-clock layout of the `last_updated` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders an instant as wall-clock time in `tz`, truncated to seconds.
pub fn format_timestamp(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string()
}

/// Reads a wall-clock timestamp written by [`format_timestamp`] back into an instant.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant, so a
/// row written during the repeated hour reads back up to an hour older than
/// it is. Configure `UTC` to avoid the fold entirely.
pub fn parse_timestamp(value: &str, tz: Tz) -> Result<DateTime<Utc>, DomainError> {
    let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| DomainError::InvalidTimestamp(format!("'{}': {}", value, e)))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            DomainError::InvalidTimestamp(format!("'{}' does not exist in {}", value, tz))
        })
}
