//! Cache freshness policy
//!
//! A cached lookup goes stale in two independent ways:
//!
//! - **Automatic refresh**: once a whole day has elapsed since the entry was
//!   written, every read refreshes it.
//! - **Manual refresh**: a caller may ask for an update; it is honoured once
//!   the minute-of-hour component of the elapsed time reaches the cooldown.
//!
//! Fresh entries are decorated with two countdowns that are computed on
//! every read and never persisted.

use chrono::{DateTime, Utc};

/// Minutes a caller must wait before a forced update is honoured.
pub const MANUAL_UPDATE_COOLDOWN_MINUTES: i64 = 5;

/// Hours after which an entry is refreshed without being asked.
pub const AUTO_UPDATE_INTERVAL_HOURS: i64 = 24;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Calendar-style breakdown of elapsed time: whole days, then the remaining
/// hours (0-23) and minutes (0-59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Elapsed {
    /// Elapsed time from `from` to `to`, clamped to zero if `to` is earlier.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        let secs = (to - from).num_seconds().max(0);

        Self {
            days: secs / 86_400,
            hours: (secs % 86_400) / 3_600,
            minutes: (secs % 3_600) / 60,
        }
    }

    /// Minutes figure used for the manual-update countdown.
    ///
    /// Days count as full days of minutes but hours are added as a raw
    /// count, not multiplied by 60. Existing clients depend on the
    /// resulting countdown values, so the arithmetic is kept as is.
    pub fn countdown_minutes(&self) -> i64 {
        let mut total = 0;
        if self.days > 0 {
            total += self.days * MINUTES_PER_DAY;
        }
        if self.hours > 0 {
            total += self.hours;
        }
        if self.minutes > 0 {
            total += self.minutes;
        }
        total
    }
}

/// Read-time countdowns attached to a fresh entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoration {
    pub minutes_till_manual_update: Option<i64>,
    pub hours_till_auto_update: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh(Decoration),
    Stale,
}

impl Freshness {
    pub fn is_stale(&self) -> bool {
        matches!(self, Freshness::Stale)
    }
}

pub fn evaluate(last_updated: DateTime<Utc>, now: DateTime<Utc>, force_update: bool) -> Freshness {
    let elapsed = Elapsed::between(last_updated, now);

    if elapsed.days >= 1 {
        return Freshness::Stale;
    }

    // Only the minute-of-hour component is checked, not total minutes.
    if force_update && elapsed.minutes >= MANUAL_UPDATE_COOLDOWN_MINUTES {
        return Freshness::Stale;
    }

    let mut decoration = Decoration::default();

    let countdown = elapsed.countdown_minutes();
    if countdown <= MANUAL_UPDATE_COOLDOWN_MINUTES {
        decoration.minutes_till_manual_update =
            Some(MANUAL_UPDATE_COOLDOWN_MINUTES + 1 - countdown);
    }

    if elapsed.hours < AUTO_UPDATE_INTERVAL_HOURS {
        decoration.hours_till_auto_update = Some(AUTO_UPDATE_INTERVAL_HOURS - elapsed.hours);
    }

    Freshness::Fresh(decoration)
}
