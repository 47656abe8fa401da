//! Commands, queries, and results for schedule operations.
//!
//! Every service operation takes one explicit struct in and hands one
//! struct back; transports validate and translate at the boundary instead
//! of passing loose maps around.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::daily_plan::DailyPlan;
use crate::domain::models::schedule::Schedule;

#[derive(Debug, Clone)]
pub struct CreateScheduleCommand {
    pub user_id: i64,
    pub medication_name: String,
    pub frequency: u32,
    /// Defaults to today when unset
    pub start_date: Option<NaiveDate>,
    pub duration_days: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct CreateScheduleResult {
    pub schedule_id: i64,
}

#[derive(Debug, Clone)]
pub struct GetScheduleQuery {
    pub user_id: i64,
    pub schedule_id: i64,
}

/// An active schedule together with its full, unfiltered daily plan.
#[derive(Debug, Clone)]
pub struct GetScheduleResult {
    pub schedule: Schedule,
    pub daily_plan: DailyPlan,
}

#[derive(Debug, Clone)]
pub struct ListScheduleIdsQuery {
    pub user_id: i64,
}

#[derive(Debug, Clone)]
pub struct ListScheduleIdsResult {
    pub user_id: i64,
    pub schedule_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct NextTakingsQuery {
    pub user_id: i64,
}

/// One schedule's currently relevant dose times.
#[derive(Debug, Clone)]
pub struct NextTaking {
    pub schedule_id: i64,
    pub medication_name: String,
    pub times: Vec<NaiveTime>,
}

#[derive(Debug, Clone)]
pub struct NextTakingsResult {
    pub user_id: i64,
    pub takings: Vec<NextTaking>,
}
