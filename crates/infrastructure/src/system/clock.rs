use chrono::{DateTime, SubsecRound, Utc};
use ferrous_lookup_application::ports::Clock;

/// Wall clock, truncated to whole seconds to match stored timestamps.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0)
    }
}
