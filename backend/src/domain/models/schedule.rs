use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MIN_FREQUENCY: u32 = 1;
pub const MAX_FREQUENCY: u32 = 15;
pub const MAX_MEDICATION_NAME_LEN: usize = 255;

/// A user's medication schedule.
///
/// `end_date` is derived once at creation as `start_date + duration_days`
/// and is the last day the schedule is active, inclusive: the schedule only
/// expires when `end_date` is strictly before "today". `None` means the
/// intake never ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Storage-assigned id; zero until the schedule is stored
    pub id: i64,
    pub user_id: i64,
    pub medication_name: String,
    /// Doses per day, 1..=15
    pub frequency: u32,
    pub start_date: NaiveDate,
    pub duration_days: Option<u32>,
    pub end_date: Option<NaiveDate>,
}

/// Lifecycle classification of a schedule relative to a given day.
///
/// Recomputed on every query; there is no stored state and no transition
/// logic beyond the calendar date advancing between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    NotStarted,
    Active,
    Expired,
}

impl Schedule {
    /// Validate and build a new, not-yet-stored schedule.
    ///
    /// `start_date` defaults to `today` when unset.
    pub fn new(
        user_id: i64,
        medication_name: String,
        frequency: u32,
        start_date: Option<NaiveDate>,
        duration_days: Option<u32>,
        today: NaiveDate,
    ) -> Result<Self, ScheduleError> {
        if medication_name.trim().is_empty() {
            return Err(ScheduleError::EmptyMedicationName);
        }
        if medication_name.chars().count() > MAX_MEDICATION_NAME_LEN {
            return Err(ScheduleError::MedicationNameTooLong);
        }
        if !(MIN_FREQUENCY..=MAX_FREQUENCY).contains(&frequency) {
            return Err(ScheduleError::InvalidFrequency(frequency));
        }
        if duration_days == Some(0) {
            return Err(ScheduleError::ZeroDuration);
        }

        let start_date = start_date.unwrap_or(today);
        let end_date = duration_days.map(|days| start_date + Duration::days(i64::from(days)));

        Ok(Self {
            id: 0,
            user_id,
            medication_name,
            frequency,
            start_date,
            duration_days,
            end_date,
        })
    }

    /// Classify this schedule against a calendar day.
    pub fn status_on(&self, today: NaiveDate) -> ScheduleStatus {
        if self.start_date > today {
            ScheduleStatus::NotStarted
        } else if matches!(self.end_date, Some(end_date) if end_date < today) {
            ScheduleStatus::Expired
        } else {
            ScheduleStatus::Active
        }
    }
}

/// Everything that can go wrong around a schedule.
///
/// All variants except `Storage` are ordinary business conditions the
/// transport layer maps to client-visible responses.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Frequency must be between {MIN_FREQUENCY} and {MAX_FREQUENCY} doses per day, got {0}")]
    InvalidFrequency(u32),
    #[error("Medication name cannot be empty")]
    EmptyMedicationName,
    #[error("Medication name is too long (max {MAX_MEDICATION_NAME_LEN} characters)")]
    MedicationNameTooLong,
    #[error("Duration must be at least one day when set")]
    ZeroDuration,
    #[error("The medication schedule with id={schedule_id} for user={user_id} not found")]
    NotFound { schedule_id: i64, user_id: i64 },
    #[error("The medication '{medication_name}' intake starts on {start_date}")]
    NotStarted {
        medication_name: String,
        start_date: NaiveDate,
    },
    #[error("The medication '{medication_name}' intake ended on {end_date}")]
    Expired {
        medication_name: String,
        end_date: NaiveDate,
    },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
