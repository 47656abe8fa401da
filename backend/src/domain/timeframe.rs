//! Next-takings relevance window.
//!
//! A dose time is worth showing when it is inside the day-operating hours
//! and either coming up within the lookahead window or still inside its
//! grace period. All comparisons are inclusive and on time-of-day only;
//! the date part of `now` never influences the outcome.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::config::SchedulingConfig;

/// Decides whether a dose is currently due or upcoming.
#[derive(Debug, Clone)]
pub struct TimeframeFilter {
    day_start: NaiveTime,
    day_end: NaiveTime,
    lookahead: Duration,
    grace: Duration,
}

impl TimeframeFilter {
    pub fn new(config: &SchedulingConfig) -> Self {
        Self {
            day_start: config.day_start,
            day_end: config.day_end,
            lookahead: Duration::minutes(i64::from(config.lookahead_minutes)),
            grace: Duration::minutes(i64::from(config.grace_minutes)),
        }
    }

    /// True when `dose_time` is within day limits and either upcoming
    /// (between `now` and `now + lookahead`) or active (between its
    /// scheduled time and `scheduled + grace`). Seconds of `now` count:
    /// at 08:30:01 a dose scheduled for 08:00 has left its 30-minute
    /// grace window.
    pub fn is_relevant(&self, dose_time: NaiveTime, now: NaiveDateTime) -> bool {
        let now_time = now.time();
        let window_end = add_clamped(dose_time, self.grace);
        let upper_bound = add_clamped(now_time, self.lookahead);

        let within_day_limits = self.day_start <= dose_time && dose_time <= self.day_end;
        let is_upcoming = now_time <= dose_time && dose_time <= upper_bound;
        let is_active = dose_time <= now_time && now_time <= window_end;

        within_day_limits && (is_upcoming || is_active)
    }
}

/// Time-of-day addition that clamps at 23:59:59 instead of wrapping.
///
/// A wrapped bound would read as early morning and compare below every
/// evening dose, silently dropping doses near midnight under late day
/// windows.
fn add_clamped(time: NaiveTime, delta: Duration) -> NaiveTime {
    let (shifted, overflow) = time.overflowing_add_signed(delta);
    if overflow > 0 {
        NaiveTime::MIN + Duration::seconds(24 * 60 * 60 - 1)
    } else {
        shifted
    }
}
