//! Schedule lifecycle evaluation and dose-plan composition.
//!
//! Single-schedule retrieval fails loudly on not-yet-started or expired
//! schedules; list-shaped operations (id listing, next takings) silently
//! skip them instead, because "nothing to show" is a normal outcome there,
//! not an error.

use std::sync::Arc;

use chrono::NaiveTime;
use tracing::{debug, info};

use crate::config::SchedulingConfig;
use crate::domain::clock::Clock;
use crate::domain::commands::schedules::{
    CreateScheduleCommand, CreateScheduleResult, GetScheduleQuery, GetScheduleResult,
    ListScheduleIdsQuery, ListScheduleIdsResult, NextTaking, NextTakingsQuery, NextTakingsResult,
};
use crate::domain::daily_plan::DailyPlanGenerator;
use crate::domain::models::schedule::{Schedule, ScheduleError, ScheduleStatus};
use crate::domain::timeframe::TimeframeFilter;
use crate::storage::traits::ScheduleStorage;

/// Service for managing medication schedules and their dose plans.
pub struct ScheduleService<S: ScheduleStorage> {
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
    plan_generator: DailyPlanGenerator,
    timeframe: TimeframeFilter,
}

impl<S: ScheduleStorage> ScheduleService<S> {
    pub fn new(storage: Arc<S>, clock: Arc<dyn Clock>, config: &SchedulingConfig) -> Self {
        Self {
            storage,
            clock,
            plan_generator: DailyPlanGenerator::new(config),
            timeframe: TimeframeFilter::new(config),
        }
    }

    /// Validate and store a new schedule.
    pub fn create_schedule(
        &self,
        command: CreateScheduleCommand,
    ) -> Result<CreateScheduleResult, ScheduleError> {
        debug!("Creating schedule: {:?}", command);

        let user_id = command.user_id;
        let schedule = Schedule::new(
            user_id,
            command.medication_name,
            command.frequency,
            command.start_date,
            command.duration_days,
            self.clock.today(),
        )?;
        let schedule_id = self.storage.insert_schedule(schedule)?;

        info!("Created schedule {} for user {}", schedule_id, user_id);
        Ok(CreateScheduleResult { schedule_id })
    }

    /// Fetch a single schedule together with its full daily plan.
    ///
    /// Fails with [`ScheduleError::NotStarted`] / [`ScheduleError::Expired`]
    /// when the schedule is outside its active window.
    pub fn get_user_schedule(
        &self,
        query: GetScheduleQuery,
    ) -> Result<GetScheduleResult, ScheduleError> {
        let schedule = self
            .storage
            .get_schedule(query.user_id, query.schedule_id)?
            .ok_or(ScheduleError::NotFound {
                schedule_id: query.schedule_id,
                user_id: query.user_id,
            })?;

        let today = self.clock.today();
        match schedule.status_on(today) {
            ScheduleStatus::NotStarted => Err(ScheduleError::NotStarted {
                start_date: schedule.start_date,
                medication_name: schedule.medication_name,
            }),
            ScheduleStatus::Expired => {
                // Expired implies end_date is set
                let end_date = schedule.end_date.unwrap_or(today);
                Err(ScheduleError::Expired {
                    medication_name: schedule.medication_name,
                    end_date,
                })
            }
            ScheduleStatus::Active => {
                let daily_plan = self.plan_generator.generate(schedule.frequency)?;
                Ok(GetScheduleResult {
                    schedule,
                    daily_plan,
                })
            }
        }
    }

    /// IDs of the user's currently active schedules.
    pub fn get_user_schedule_ids(
        &self,
        query: ListScheduleIdsQuery,
    ) -> Result<ListScheduleIdsResult, ScheduleError> {
        let today = self.clock.today();
        let schedules = self.storage.list_user_schedules(query.user_id)?;
        let schedule_ids: Vec<i64> = schedules
            .iter()
            .filter(|schedule| schedule.status_on(today) == ScheduleStatus::Active)
            .map(|schedule| schedule.id)
            .collect();

        debug!(
            "User {} has {} active of {} schedules",
            query.user_id,
            schedule_ids.len(),
            schedules.len()
        );
        Ok(ListScheduleIdsResult {
            user_id: query.user_id,
            schedule_ids,
        })
    }

    /// Doses currently due or upcoming across the user's active schedules.
    ///
    /// Schedules with no relevant dose right now are omitted entirely.
    pub fn get_next_takings(
        &self,
        query: NextTakingsQuery,
    ) -> Result<NextTakingsResult, ScheduleError> {
        let now = self.clock.now();
        let today = now.date();

        let mut takings = Vec::new();
        for schedule in self.storage.list_user_schedules(query.user_id)? {
            if schedule.status_on(today) != ScheduleStatus::Active {
                continue;
            }
            let plan = self.plan_generator.generate(schedule.frequency)?;
            let times: Vec<NaiveTime> = plan
                .times()
                .iter()
                .copied()
                .filter(|dose_time| self.timeframe.is_relevant(*dose_time, now))
                .collect();
            if times.is_empty() {
                continue;
            }
            takings.push(NextTaking {
                schedule_id: schedule.id,
                medication_name: schedule.medication_name,
                times,
            });
        }

        debug!(
            "User {} has {} schedules with doses due around {}",
            query.user_id,
            takings.len(),
            now
        );
        Ok(NextTakingsResult {
            user_id: query.user_id,
            takings,
        })
    }
}

/// Converts domain results into the wire-facing DTOs of the `shared` crate.
pub struct ScheduleMapper;

impl ScheduleMapper {
    pub fn to_dto(result: &GetScheduleResult) -> shared::MedicationSchedule {
        let schedule = &result.schedule;
        shared::MedicationSchedule {
            id: schedule.id,
            user_id: schedule.user_id,
            medication_name: schedule.medication_name.clone(),
            frequency: schedule.frequency,
            start_date: format_date(schedule.start_date),
            duration_days: schedule.duration_days,
            end_date: schedule.end_date.map(format_date),
            daily_plan: result.daily_plan.to_strings(),
        }
    }

    pub fn created_to_dto(result: &CreateScheduleResult) -> shared::CreateScheduleResponse {
        shared::CreateScheduleResponse {
            schedule_id: result.schedule_id,
        }
    }

    pub fn schedule_ids_to_dto(result: &ListScheduleIdsResult) -> shared::ScheduleIdsResponse {
        shared::ScheduleIdsResponse {
            user_id: result.user_id,
            schedule_ids: result.schedule_ids.clone(),
        }
    }

    pub fn next_takings_to_dto(result: &NextTakingsResult) -> shared::NextTakingsResponse {
        shared::NextTakingsResponse {
            user_id: result.user_id,
            next_takings: result
                .takings
                .iter()
                .map(|taking| shared::NextTaking {
                    schedule_id: taking.schedule_id,
                    medication_name: taking.medication_name.clone(),
                    times: taking
                        .times
                        .iter()
                        .map(|t| t.format("%H:%M").to_string())
                        .collect(),
                })
                .collect(),
        }
    }
}

fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
