//! Sandbox composition root.
//!
//! Wires the scheduling service to the in-memory store, seeds a couple of
//! schedules, and prints what a transport adapter would serve. Real
//! deployments replace the store with a SQL repository and put REST/gRPC
//! handlers in front of the same service.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medtrack_backend::config::AppConfig;
use medtrack_backend::domain::clock::SystemClock;
use medtrack_backend::domain::commands::schedules::{
    CreateScheduleCommand, GetScheduleQuery, NextTakingsQuery,
};
use medtrack_backend::domain::schedule_service::{ScheduleMapper, ScheduleService};
use medtrack_backend::storage::memory::MemoryScheduleStorage;

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        "Scheduling window {}-{}, rounding to {} minutes",
        config.scheduling.day_start,
        config.scheduling.day_end,
        config.scheduling.rounding_interval_minutes
    );

    let storage = Arc::new(MemoryScheduleStorage::new());
    let clock = Arc::new(SystemClock);
    let service = ScheduleService::new(storage, clock, &config.scheduling);

    let created = service.create_schedule(CreateScheduleCommand {
        user_id: 1,
        medication_name: "Amoxicillin".to_string(),
        frequency: 3,
        start_date: None,
        duration_days: Some(7),
    })?;
    service.create_schedule(CreateScheduleCommand {
        user_id: 1,
        medication_name: "Vitamin D".to_string(),
        frequency: 7,
        start_date: None,
        duration_days: None,
    })?;

    let schedule = service.get_user_schedule(GetScheduleQuery {
        user_id: 1,
        schedule_id: created.schedule_id,
    })?;
    println!(
        "{}",
        serde_json::to_string_pretty(&ScheduleMapper::to_dto(&schedule))?
    );

    let takings = service.get_next_takings(NextTakingsQuery { user_id: 1 })?;
    println!(
        "{}",
        serde_json::to_string_pretty(&ScheduleMapper::next_takings_to_dto(&takings))?
    );

    Ok(())
}
