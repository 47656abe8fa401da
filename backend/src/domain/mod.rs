//! Domain layer: pure scheduling logic and the service composing it.

pub mod clock;
pub mod commands;
pub mod daily_plan;
pub mod models;
pub mod schedule_service;
pub mod timeframe;
