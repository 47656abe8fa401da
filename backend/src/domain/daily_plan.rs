//! Daily dose-plan generation.
//!
//! Converts a schedule's intake frequency into concrete wall-clock times,
//! evenly spaced across the configured day window and snapped up to the
//! rounding interval. Pure computation: same frequency and configuration
//! always produce the same plan, so plans are recomputed on every read and
//! never persisted.

use chrono::{Duration, NaiveTime, Timelike};

use crate::config::SchedulingConfig;
use crate::domain::models::schedule::{ScheduleError, MAX_FREQUENCY, MIN_FREQUENCY};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A full day's dose times, ordered and aligned to the rounding interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPlan(Vec<NaiveTime>);

impl DailyPlan {
    pub fn times(&self) -> &[NaiveTime] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the plan as `HH:MM` strings for the wire.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|t| t.format("%H:%M").to_string()).collect()
    }
}

/// Spaces doses evenly between `day_start` and `day_end`.
#[derive(Debug, Clone)]
pub struct DailyPlanGenerator {
    day_start: NaiveTime,
    day_end: NaiveTime,
    rounding_interval_minutes: u32,
}

impl DailyPlanGenerator {
    pub fn new(config: &SchedulingConfig) -> Self {
        Self {
            day_start: config.day_start,
            day_end: config.day_end,
            rounding_interval_minutes: config.rounding_interval_minutes,
        }
    }

    /// Generate the day's dose times for a given frequency.
    ///
    /// A single daily dose lands on `day_start`; for more, dose `i` sits at
    /// `day_start + i * span / (frequency - 1)` before snapping, so the
    /// first dose is `day_start` and the last is exactly `day_end`.
    /// Frequency is validated upstream; out-of-range input still gets a
    /// defensive [`ScheduleError::InvalidFrequency`] instead of a panic.
    pub fn generate(&self, frequency: u32) -> Result<DailyPlan, ScheduleError> {
        if !(MIN_FREQUENCY..=MAX_FREQUENCY).contains(&frequency) {
            return Err(ScheduleError::InvalidFrequency(frequency));
        }
        if frequency == 1 {
            return Ok(DailyPlan(vec![self.day_start]));
        }

        let span_seconds = (self.day_end - self.day_start).num_seconds();
        let gaps = i64::from(frequency - 1);
        let times = (0..i64::from(frequency))
            .map(|i| {
                // Multiply before dividing; the sub-minute truncation is
                // discarded by the snap anyway.
                let raw = self.day_start + Duration::seconds(i * span_seconds / gaps);
                round_up_to_interval(raw, self.rounding_interval_minutes)
            })
            .collect();
        Ok(DailyPlan(times))
    }
}

/// Snap a time up to the next multiple of `interval_minutes`.
///
/// Ceiling semantics, not nearest: 08:01 becomes 08:15, while exact
/// multiples stay fixed. Seconds are discarded before snapping. A carry
/// that would cross midnight clamps to the last minute of the day (it is
/// unreachable for validated configurations, where `day_end` itself sits
/// on the rounding grid).
fn round_up_to_interval(time: NaiveTime, interval_minutes: u32) -> NaiveTime {
    let minutes = time.hour() * 60 + time.minute();
    let rounded = minutes.div_ceil(interval_minutes) * interval_minutes;
    NaiveTime::MIN + Duration::minutes(i64::from(rounded.min(MINUTES_PER_DAY - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> DailyPlanGenerator {
        DailyPlanGenerator::new(&SchedulingConfig::default())
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    #[test]
    fn plans_match_expected_tables_for_every_frequency() {
        let cases: &[(u32, &[&str])] = &[
            (1, &["08:00"]),
            (2, &["08:00", "22:00"]),
            (3, &["08:00", "15:00", "22:00"]),
            (4, &["08:00", "12:45", "17:30", "22:00"]),
            (5, &["08:00", "11:30", "15:00", "18:30", "22:00"]),
            (6, &["08:00", "11:00", "13:45", "16:30", "19:15", "22:00"]),
            (7, &["08:00", "10:30", "12:45", "15:00", "17:30", "19:45", "22:00"]),
            (8, &["08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00", "22:00"]),
            (
                9,
                &["08:00", "09:45", "11:30", "13:15", "15:00", "16:45", "18:30", "20:15", "22:00"],
            ),
            (
                10,
                &[
                    "08:00", "09:45", "11:15", "12:45", "14:15", "16:00", "17:30", "19:00",
                    "20:30", "22:00",
                ],
            ),
            (
                11,
                &[
                    "08:00", "09:30", "11:00", "12:15", "13:45", "15:00", "16:30", "18:00",
                    "19:15", "20:45", "22:00",
                ],
            ),
            (
                12,
                &[
                    "08:00", "09:30", "10:45", "12:00", "13:15", "14:30", "15:45", "17:00",
                    "18:15", "19:30", "20:45", "22:00",
                ],
            ),
            (
                13,
                &[
                    "08:00", "09:15", "10:30", "11:30", "12:45", "14:00", "15:00", "16:15",
                    "17:30", "18:30", "19:45", "21:00", "22:00",
                ],
            ),
            (
                14,
                &[
                    "08:00", "09:15", "10:15", "11:15", "12:30", "13:30", "14:30", "15:45",
                    "16:45", "17:45", "19:00", "20:00", "21:00", "22:00",
                ],
            ),
            (
                15,
                &[
                    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00",
                    "16:00", "17:00", "18:00", "19:00", "20:00", "21:00", "22:00",
                ],
            ),
        ];

        let generator = generator();
        for (frequency, expected) in cases {
            let plan = generator.generate(*frequency).expect("valid frequency");
            assert_eq!(
                plan.to_strings(),
                *expected,
                "plan mismatch for frequency {frequency}"
            );
        }
    }

    #[test]
    fn plan_invariants_hold_for_every_frequency() {
        let generator = generator();
        for frequency in 1..=15u32 {
            let plan = generator.generate(frequency).expect("valid frequency");
            assert_eq!(plan.len(), frequency as usize);
            assert!(plan.times().windows(2).all(|pair| pair[0] <= pair[1]));
            for time in plan.times() {
                assert_eq!(time.minute() % 15, 0, "unaligned time {time}");
                assert_eq!(time.second(), 0);
            }
            assert_eq!(plan.times()[0], hm(8, 0));
            if frequency > 1 {
                assert_eq!(*plan.times().last().expect("non-empty"), hm(22, 0));
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = generator();
        let first = generator.generate(7).expect("valid");
        let second = generator.generate(7).expect("valid");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_out_of_range_frequency() {
        let generator = generator();
        for frequency in [0, 16] {
            assert!(matches!(
                generator.generate(frequency),
                Err(ScheduleError::InvalidFrequency(f)) if f == frequency
            ));
        }
    }

    #[test]
    fn respects_a_custom_day_window() {
        let config = SchedulingConfig {
            day_start: hm(9, 0),
            day_end: hm(17, 0),
            rounding_interval_minutes: 30,
            ..SchedulingConfig::default()
        };
        let generator = DailyPlanGenerator::new(&config);
        let plan = generator.generate(3).expect("valid");
        assert_eq!(plan.to_strings(), vec!["09:00", "13:00", "17:00"]);
    }

    #[test]
    fn round_up_table() {
        let cases = [
            ((8, 0, 0), (8, 0)),
            ((8, 1, 0), (8, 15)),
            ((8, 7, 0), (8, 15)),
            ((8, 14, 0), (8, 15)),
            ((8, 15, 0), (8, 15)),
            ((8, 16, 0), (8, 30)),
            ((8, 29, 0), (8, 30)),
            ((8, 30, 0), (8, 30)),
            ((8, 31, 0), (8, 45)),
            ((8, 44, 0), (8, 45)),
            ((8, 45, 0), (8, 45)),
            ((8, 46, 0), (9, 0)),
            ((8, 59, 0), (9, 0)),
            ((9, 0, 0), (9, 0)),
            ((9, 1, 0), (9, 15)),
            ((9, 14, 0), (9, 15)),
            ((9, 45, 0), (9, 45)),
            ((10, 59, 0), (11, 0)),
            ((21, 59, 0), (22, 0)),
            ((22, 0, 0), (22, 0)),
            ((22, 1, 0), (22, 15)),
            // seconds are discarded before snapping
            ((9, 33, 20), (9, 45)),
            ((14, 0, 59), (14, 0)),
        ];
        for ((h, m, s), (eh, em)) in cases {
            let input = NaiveTime::from_hms_opt(h, m, s).expect("valid time");
            assert_eq!(
                round_up_to_interval(input, 15),
                hm(eh, em),
                "rounding {h:02}:{m:02}:{s:02}"
            );
        }
    }

    #[test]
    fn round_up_clamps_instead_of_wrapping_past_midnight() {
        let input = NaiveTime::from_hms_opt(23, 50, 0).expect("valid time");
        assert_eq!(round_up_to_interval(input, 15), hm(23, 59));
    }
}
