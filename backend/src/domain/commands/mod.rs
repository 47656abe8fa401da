//! Typed command/query/result structs for each schedule operation.

pub mod schedules;
