//! Medication-scheduling backend core.
//!
//! Turns a schedule's daily intake frequency into concrete wall-clock dose
//! times and decides which of those doses are currently due or upcoming.
//! Transports (REST/gRPC) and real persistence sit on top of this crate and
//! talk to it through the [`storage::traits::ScheduleStorage`] and
//! [`domain::clock::Clock`] seams.

pub mod config;
pub mod domain;
pub mod storage;
