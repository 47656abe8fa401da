//! Configuration
//!
//! Loaded once at startup from three layers:
//! - built-in defaults (08:00-22:00 window, 15-minute rounding)
//! - `config.toml` in the working directory
//! - environment variables with a `MEDTRACK_` prefix
//!   (e.g. `MEDTRACK_SCHEDULING__LOOKAHEAD_MINUTES=60`)
//!
//! The result is an immutable value passed by reference into the domain
//! components; nothing in this crate reads settings from ambient state.

use chrono::{NaiveTime, Timelike};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. "info" or "medtrack_backend=debug"
    pub level: String,
}

/// Settings that shape dose-plan generation and the next-takings window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// First possible dose time of the day
    pub day_start: NaiveTime,
    /// Last possible dose time of the day
    pub day_end: NaiveTime,
    /// Granularity dose times are snapped up to; must divide 60
    pub rounding_interval_minutes: u32,
    /// How far into the future a dose still counts as upcoming
    pub lookahead_minutes: u32,
    /// How long after its scheduled time a dose still counts as active
    pub grace_minutes: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scheduling: SchedulingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            day_start: hm(8, 0),
            day_end: hm(22, 0),
            rounding_interval_minutes: 15,
            lookahead_minutes: 120,
            grace_minutes: 30,
        }
    }
}

impl AppConfig {
    /// Load and validate the layered configuration.
    pub fn load() -> anyhow::Result<Self> {
        let figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MEDTRACK_").split("__"));
        Self::load_from(figment)
    }

    fn load_from(figment: Figment) -> anyhow::Result<Self> {
        let config: AppConfig = figment.extract()?;
        config.scheduling.validate()?;
        Ok(config)
    }
}

impl SchedulingConfig {
    /// Check the invariants the scheduling components rely on.
    ///
    /// Day bounds must sit exactly on a rounding boundary: that keeps
    /// round-up idempotent at the window edges, pins the last plan entry to
    /// `day_end`, and makes a rounding carry past midnight impossible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let interval = self.rounding_interval_minutes;
        if interval == 0 || interval > 60 || 60 % interval != 0 {
            return Err(ConfigError::InvalidRoundingInterval(interval));
        }
        if self.day_start >= self.day_end {
            return Err(ConfigError::EmptyDayWindow {
                day_start: self.day_start,
                day_end: self.day_end,
            });
        }
        for (name, bound) in [("day_start", self.day_start), ("day_end", self.day_end)] {
            if bound.second() != 0 || bound.nanosecond() != 0 || bound.minute() % interval != 0 {
                return Err(ConfigError::MisalignedDayBound { name, time: bound });
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Rounding interval must divide 60 evenly, got {0} minutes")]
    InvalidRoundingInterval(u32),
    #[error("Day window is empty: day_start {day_start} is not before day_end {day_end}")]
    EmptyDayWindow {
        day_start: NaiveTime,
        day_end: NaiveTime,
    },
    #[error("{name} ({time}) must fall on a rounding boundary")]
    MisalignedDayBound { name: &'static str, time: NaiveTime },
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("static time literal")
}
