//! Storage abstraction for schedules.
//!
//! The domain layer only sees this trait; a SQL repository, a gRPC-backed
//! store, or the in-memory implementation can stand behind it without the
//! services changing.

use anyhow::Result;

use crate::domain::models::schedule::Schedule;

pub trait ScheduleStorage: Send + Sync {
    /// Store a new schedule and return the assigned id.
    fn insert_schedule(&self, schedule: Schedule) -> Result<i64>;

    /// Retrieve one of a user's schedules by id.
    fn get_schedule(&self, user_id: i64, schedule_id: i64) -> Result<Option<Schedule>>;

    /// List all schedules belonging to a user, ordered by id.
    fn list_user_schedules(&self, user_id: i64) -> Result<Vec<Schedule>>;
}
