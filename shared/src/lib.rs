//! Wire-facing data types shared between the backend and its transports.
//!
//! Dates are carried as `YYYY-MM-DD` strings and dose times as `HH:MM`
//! strings so that REST and gRPC adapters can serialize them without
//! pulling in the backend's chrono types.

use serde::{Deserialize, Serialize};

/// A medication schedule as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationSchedule {
    pub id: i64,
    /// ID of the user this schedule belongs to
    pub user_id: i64,
    /// Name of the medication (max 255 characters)
    pub medication_name: String,
    /// Doses per day, 1..=15
    pub frequency: u32,
    /// First day the schedule is active (`YYYY-MM-DD`)
    pub start_date: String,
    /// Intake duration in days; absent means the schedule never expires
    pub duration_days: Option<u32>,
    /// Last active day (`YYYY-MM-DD`), inclusive. Derived, read-only.
    pub end_date: Option<String>,
    /// Full day's dose times as `HH:MM`, recomputed on every read
    pub daily_plan: Vec<String>,
}

/// Request to create a new medication schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub user_id: i64,
    pub medication_name: String,
    pub frequency: u32,
    /// Defaults to today when omitted (`YYYY-MM-DD`)
    pub start_date: Option<String>,
    /// Must be positive when set
    pub duration_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateScheduleResponse {
    pub schedule_id: i64,
}

/// IDs of a user's currently active schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleIdsResponse {
    pub user_id: i64,
    pub schedule_ids: Vec<i64>,
}

/// One schedule's contribution to a next-takings query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextTaking {
    pub schedule_id: i64,
    pub medication_name: String,
    /// Dose times that are currently due or upcoming, as `HH:MM`
    pub times: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextTakingsResponse {
    pub user_id: i64,
    pub next_takings: Vec<NextTaking>,
}
